use std::error::Error;

use linepath_core::LineScale;

use crate::args::Args;

/// Presentation settings shared by every subcommand
pub struct LinePathApp {
    pub scale: LineScale,
    pub unit: String,
}

impl LinePathApp {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error>> {
        if !args.origin.is_finite() {
            return Err(format!("Origin must be a finite number, got {}", args.origin).into());
        }
        if !args.step.is_finite() || args.step == 0.0 {
            return Err(format!("Step must be a finite, non-zero number, got {}", args.step).into());
        }

        Ok(Self {
            scale: LineScale::new(args.origin, args.step),
            unit: args.unit.clone(),
        })
    }
}
