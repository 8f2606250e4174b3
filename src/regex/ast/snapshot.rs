//! AST Snapshot - a normalized, serializable view of a regex tree
//!
//! The snapshot captures node types, the pattern text of each node, a few
//! kind-specific attributes and the children, in the order a reader meets
//! them in the pattern. Serializers and snapshot tests consume it instead of
//! walking the arena themselves.
//!
//! Only tree structure is captured; continuations and glue states are not.

use super::elements::{CharacterClassElement, ClassElement, RegexNode};
use super::traits::RegexSyntaxElement;
use crate::regex::automaton::{Automaton, StateId};
use crate::regex::building::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of a tree node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The type of node (e.g. "Sequence", "Repetition")
    pub node_type: String,

    /// The pattern text of the node
    pub label: String,

    /// Additional attributes specific to the node type
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in reading order
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.insert(key.into(), value.to_string());
        self
    }

    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// One line per node, children indented by two spaces
    ///
    /// ```text
    /// Repetition `a*` [max=inf, min=0, modifier=Greedy]
    ///   Character `a`
    /// ```
    pub fn render_tree(&self) -> String {
        let mut output = String::new();
        self.render_into(&mut output, 0);
        output
    }

    fn render_into(&self, output: &mut String, depth: usize) {
        output.push_str(&format!("{}{} `{}`", "  ".repeat(depth), self.node_type, self.label));
        if !self.attributes.is_empty() {
            let attributes: Vec<String> = self
                .attributes
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            output.push_str(&format!(" [{}]", attributes.join(", ")));
        }
        output.push('\n');
        for child in &self.children {
            child.render_into(output, depth + 1);
        }
    }
}

pub fn snapshot_regex(regex: &Regex) -> AstSnapshot {
    snapshot_tree(regex.automaton(), regex.root())
}

/// Snapshot the tree node `id` and everything below it
pub fn snapshot_tree(automaton: &Automaton, id: StateId) -> AstSnapshot {
    let tree = automaton.tree(id);
    let snapshot = AstSnapshot::new(tree.node_type(), automaton.text(id));
    let child = |child: StateId| snapshot_tree(automaton, child);

    match tree.node() {
        RegexNode::Character(character) if character.is_escape_sequence() => {
            snapshot.with_attribute("escape", true)
        }
        RegexNode::Character(_) | RegexNode::Dot | RegexNode::MiscEscapeSequence => snapshot,
        RegexNode::Boundary(boundary) => {
            snapshot.with_attribute("type", format!("{:?}", boundary.boundary_type()))
        }
        RegexNode::EscapedCharacterClass(class) => snapshot.with_attribute("class", class),
        RegexNode::Sequence(sequence) => {
            snapshot.with_children(sequence.items().iter().copied().map(child).collect())
        }
        RegexNode::Disjunction(disjunction) => snapshot.with_children(
            disjunction.alternatives().iter().copied().map(child).collect(),
        ),
        RegexNode::CapturingGroup(group) => {
            let mut snapshot = snapshot.with_attribute("number", group.group_number());
            if let Some(name) = group.name() {
                snapshot = snapshot.with_attribute("name", name);
            }
            snapshot.with_children(group.group().element().map(child).into_iter().collect())
        }
        RegexNode::NonCapturingGroup(group) => {
            let mut snapshot = snapshot;
            if !group.enabled_flags().is_empty() {
                snapshot = snapshot.with_attribute("enabled", group.enabled_flags().letters());
            }
            if !group.disabled_flags().is_empty() {
                snapshot = snapshot.with_attribute("disabled", group.disabled_flags().letters());
            }
            snapshot.with_children(group.group().element().map(child).into_iter().collect())
        }
        RegexNode::AtomicGroup(group) => {
            snapshot.with_children(group.group().element().map(child).into_iter().collect())
        }
        RegexNode::LookAround(lookaround) => snapshot
            .with_attribute("direction", format!("{:?}", lookaround.direction()))
            .with_attribute("polarity", format!("{:?}", lookaround.polarity()))
            .with_children(lookaround.group().element().map(child).into_iter().collect()),
        RegexNode::BackReference(reference) => {
            snapshot.with_attribute("group", reference.group_name())
        }
        RegexNode::ReferenceCondition(condition) => {
            snapshot.with_attribute("reference", condition.reference())
        }
        RegexNode::Repetition(repetition) => {
            let quantifier = repetition.quantifier();
            let maximum = match quantifier.maximum_repetitions() {
                Some(maximum) => maximum.to_string(),
                None => "inf".to_string(),
            };
            snapshot
                .with_attribute("min", quantifier.minimum_repetitions())
                .with_attribute("max", maximum)
                .with_attribute("modifier", format!("{:?}", quantifier.modifier()))
                .with_child(child(repetition.element()))
        }
        RegexNode::CharacterClass(class) => {
            let snapshot = if class.is_negated() {
                snapshot.with_attribute("negated", true)
            } else {
                snapshot
            };
            snapshot.with_child(snapshot_class_element(automaton, class.contents()))
        }
        RegexNode::ConditionalSubpattern(conditional) => {
            let mut children = vec![child(conditional.condition()), child(conditional.yes_pattern())];
            children.extend(conditional.no_pattern().map(child));
            snapshot.with_children(children)
        }
    }
}

fn snapshot_class_element(automaton: &Automaton, element: &CharacterClassElement) -> AstSnapshot {
    let label = element.text(automaton.source());
    let nested = |classes: &[CharacterClassElement]| -> Vec<AstSnapshot> {
        classes
            .iter()
            .map(|class| snapshot_class_element(automaton, class))
            .collect()
    };
    match element.element() {
        ClassElement::Union(classes) => AstSnapshot::new("ClassUnion", label).with_children(nested(classes)),
        ClassElement::Intersection { classes, .. } => {
            AstSnapshot::new("ClassIntersection", label).with_children(nested(classes))
        }
        ClassElement::Range(_) => AstSnapshot::new("ClassRange", label),
        ClassElement::Escaped(class) => {
            AstSnapshot::new("ClassEscaped", label).with_attribute("class", class)
        }
        ClassElement::Character(_) => AstSnapshot::new("ClassCharacter", label),
        ClassElement::MiscEscapeSequence => AstSnapshot::new("ClassMiscEscape", label),
        ClassElement::Nested(class) => {
            let snapshot = AstSnapshot::new("ClassNested", label);
            let snapshot = if class.is_negated() {
                snapshot.with_attribute("negated", true)
            } else {
                snapshot
            };
            snapshot.with_child(snapshot_class_element(automaton, class.contents()))
        }
        ClassElement::Posix(class) => {
            let snapshot = AstSnapshot::new("ClassPosix", label).with_attribute("property", class.property());
            if class.is_negation() {
                snapshot.with_attribute("negated", true)
            } else {
                snapshot
            }
        }
    }
}
