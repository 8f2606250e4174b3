//! Main module for regex trees and their automaton

pub mod analysis;
pub mod ast;
pub mod automaton;
pub mod building;
pub mod testing;
