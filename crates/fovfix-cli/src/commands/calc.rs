//! Calc command: show the FoV a window size maps to.

use anyhow::Result;
use fovfix::prelude::*;

pub fn run(width: u32, height: u32) -> Result<()> {
    println!("{}", describe(WindowSize::new(width, height)));
    Ok(())
}

fn describe(size: WindowSize) -> String {
    let fov = calculate_optimal_fov(size.width, size.height);
    let mut line = format!("{}: {:.4} rad ({:.2}°)", size, fov, fov.to_degrees());
    if size.width == 0 || size.height == 0 {
        line.push_str(" [client default]");
    }
    line
}
