//! foliodesk backend library
//!
//! Backend of a desktop portfolio-management application. The core is the
//! document/asset reference resolver: attaching an arbitrary file to a
//! portfolio entity and assigning or creating the folder that holds an
//! entity's documents, reconciling the document root, the entity folder and
//! a user-picked path. Around it sit a thin application shell (close
//! handshake, preferences, file-op passthroughs) and capability traits for
//! the dialog, filesystem and command layers.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
