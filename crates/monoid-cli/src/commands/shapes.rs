//! Shapes command implementation.

use anyhow::Result;
use clap::Args;

use monoid_core::Shape;

#[derive(Args, Debug)]
pub struct ShapesArgs {}

pub fn run(_args: ShapesArgs) -> Result<()> {
    for shape in Shape::ALL {
        println!("{:<18} {}", shape.name(), shape.type_name());
    }
    Ok(())
}
