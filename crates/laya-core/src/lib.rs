//! # Laya Core Library
//!
//! This library provides the core logic for the Laya relationship-coaching
//! demo. It implements a CLI-first philosophy where the whole flow is
//! drivable from a standalone CLI binary, with any richer front end being a
//! thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Session**: A wall-clock-based state machine that requires the caller
//!   to periodically invoke `tick()` for timer-driven screens
//! - **Router**: The top-level screen router plus the typed answers map and
//!   actor role that outlive individual screens
//! - **Timers**: A one-shot pool scoped by owning screen, so leaving a
//!   screen cancels everything it scheduled
//! - **Home**: The nested tab router (home / plan / memories / gifting)
//!   that lives and dies with the `home` screen
//!
//! ## Key Components
//!
//! - [`Session`]: The live demo session
//! - [`Router`]: Top-level navigation and persistent answers
//! - [`TimerPool`]: Scoped one-shot timers
//! - [`View`]: Serializable snapshot of the current screen

pub mod answers;
pub mod config;
pub mod error;
pub mod events;
pub mod funnel;
pub mod home;
pub mod navigator;
pub mod router;
pub mod screen;
pub mod session;
pub mod timer;
pub mod view;

pub use answers::{AnswerKey, AnswerValue, Answers};
pub use config::DemoConfig;
pub use error::{ConfigError, CoreError, GiftingError, HomeError, Result};
pub use events::Event;
pub use home::{HomeState, HomeTab};
pub use router::{ActorRole, Router, Transition};
pub use screen::Screen;
pub use session::{forward_walk, LocalState, Session, TimerAction, WalkReport};
pub use timer::{OneShot, TimerId, TimerPool};
pub use view::{render, View};
