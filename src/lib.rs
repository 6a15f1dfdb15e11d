//! slide-2048: a 4x4 sliding-tile (2048) engine
//!
//! This crate provides:
//! - A `Grid` value type with the four slide/merge moves (`engine` module)
//! - Legality and win queries, and random tile spawning with an injected RNG
//! - A `Session` state machine that sequences move, spawn and terminal checks (`session` module)
//!
//! Quick start:
//! ```
//! use slide_2048::engine::{self as GameEngine, Grid, Move};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic start with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let g0 = GameEngine::new_game(&mut rng);
//! let g1 = g0.shift(Move::Left);
//! if g1 != g0 {
//!     let _g2 = GameEngine::spawn_tile(g1, &mut rng);
//! }
//! assert!(g0.has_legal_move() && !g0.has_reached_target());
//! ```
//!
//! Full loop (simplest possible)
//! ```
//! use slide_2048::engine::Move;
//! use slide_2048::session::{Command, Session};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut session = Session::new(StdRng::seed_from_u64(123));
//! let mut turn = 0;
//! while !session.state().is_terminal() && turn < 8 {
//!     session.step(Command::Move(Move::ALL[turn % 4])).unwrap();
//!     turn += 1;
//! }
//! println!("{}", session.grid());
//! ```
//!
pub mod engine;
pub mod session;
