//! Configuration and routing core of the portal navigation widget.
//!
//! Owns the hierarchical menu data model, the two path representations used
//! to track the active selection (`IdPath` by ids, `ObjectPath` by node
//! references), URL-to-path resolution and the internal-vs-external routing
//! decision engine. Everything here is framework-agnostic and synchronous;
//! rendering and network I/O live in the `components` crate.

pub mod badge;
pub mod config;
pub mod events;
pub mod id_path;
pub mod label;
pub mod object_path;
pub mod router;

pub use badge::BadgeStore;
pub use config::{ConfigValue, Configuration, ConfigurationData, Destination, Label, MenuItem};
pub use id_path::IdPath;
pub use label::{resolve_label, LabelProvider};
pub use object_path::ObjectPath;
pub use router::{LinkOutcome, RouteIntent, Router, RouterOptions};
