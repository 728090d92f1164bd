//! Diagram generation from a model.
//!
//! When no diagram exists yet, the code model is rendered straight into a
//! diagram script instead of being compared against anything.

mod plantuml;

pub use plantuml::PlantUmlGenerator;

use crate::model::UmlModel;
use crate::reports::ReportError;
use std::io::Write;

/// Renders a model as a diagram script.
pub trait DiagramGenerator {
    /// Render the whole model.
    fn generate(&self, model: &UmlModel) -> Result<String, ReportError>;

    /// Render the model into a writer.
    fn write_diagram(&self, model: &UmlModel, writer: &mut dyn Write) -> Result<(), ReportError> {
        let script = self.generate(model)?;
        writer.write_all(script.as_bytes())?;
        Ok(())
    }

    /// Short name of the diagram dialect.
    fn dialect(&self) -> &'static str;
}
