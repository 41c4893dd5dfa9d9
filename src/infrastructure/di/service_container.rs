//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::controller::AppController;
use crate::application::services::DocumentService;
use crate::infrastructure::traits::{
    CommandRunner, FileSystem, Interaction, RealCommandRunner, RealFileSystem,
    TerminalInteraction,
};

/// Container holding capability implementations and the services built on them.
pub struct ServiceContainer {
    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Dialog abstraction
    pub ui: Arc<dyn Interaction>,

    /// Command runner abstraction
    pub cmd: Arc<dyn CommandRunner>,

    /// Document reference / folder resolver
    pub documents: DocumentService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new() -> Self {
        Self::with_deps(
            Arc::new(RealFileSystem),
            Arc::new(TerminalInteraction),
            Arc::new(RealCommandRunner),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        fs: Arc<dyn FileSystem>,
        ui: Arc<dyn Interaction>,
        cmd: Arc<dyn CommandRunner>,
    ) -> Self {
        let documents = DocumentService::new(fs.clone(), ui.clone());

        Self {
            fs,
            ui,
            cmd,
            documents,
        }
    }

    /// Build the long-lived application controller.
    pub fn controller(&self) -> AppController {
        AppController::new(self.fs.clone(), self.cmd.clone())
    }
}

impl Default for ServiceContainer {
    fn default() -> Self {
        Self::new()
    }
}
