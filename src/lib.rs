//! Basketball throwing game library
//!
//! The scoring core ([`category`], [`session`], [`score`], [`scoring`]) decides
//! from contact-end events whether a throw went through the hoop.  The other
//! modules are the Bevy and Rapier glue around it: court layout, ball
//! launching, configuration, and the HUD.

pub mod category;
pub mod config;
pub mod constants;
pub mod court;
pub mod error;
pub mod graphics;
pub mod hud;
pub mod score;
pub mod scoring;
pub mod session;
pub mod throw;
