// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering of two-dimensional DV partitions to PNG.

use crate::error::DvError;
use crate::estimators::approaches::dv::Leaf;
use ndarray::{ArrayView2, Axis};
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

/// Leaf fill from light (few points) to dark (many points).
fn leaf_color(n: usize, n_max: usize) -> RGBColor {
    let t = n as f64 / n_max.max(1) as f64;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(lerp(222, 8), lerp(235, 48), lerp(247, 107))
}

/// Draw the points of a 2-D rank cloud over the boxes of its partition.
pub fn plot_partition_2d(
    cloud: ArrayView2<'_, usize>,
    leaves: &[Leaf],
    path: impl AsRef<Path>,
    x_label: &str,
    y_label: &str,
) -> Result<(), Box<dyn Error>> {
    if cloud.ncols() != 2 || leaves.iter().any(|l| l.dims() != 2) {
        return Err(Box::new(DvError::InvalidParameter {
            name: "cloud",
            reason: format!("only 2-D partitions can be plotted, got {} columns", cloud.ncols()),
        }));
    }

    let x_max = cloud.column(0).iter().copied().max().unwrap_or(1) as f64;
    let y_max = cloud.column(1).iter().copied().max().unwrap_or(1) as f64;
    let n_max = leaves.iter().map(|l| l.n).max().unwrap_or(1);

    let root = BitMapBackend::new(path.as_ref(), (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("DV partition", ("sans-serif", 30).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..x_max + 1.0, 0f64..y_max + 1.0)?;

    chart.configure_mesh().x_desc(x_label).y_desc(y_label).draw()?;

    chart.draw_series(leaves.iter().map(|leaf| {
        let lo = (leaf.mins[0] as f64 - 0.5, leaf.mins[1] as f64 - 0.5);
        let hi = (leaf.maxs[0] as f64 + 0.5, leaf.maxs[1] as f64 + 0.5);
        Rectangle::new([lo, hi], leaf_color(leaf.n, n_max).mix(0.6).filled())
    }))?;

    chart.draw_series(leaves.iter().map(|leaf| {
        let lo = (leaf.mins[0] as f64 - 0.5, leaf.mins[1] as f64 - 0.5);
        let hi = (leaf.maxs[0] as f64 + 0.5, leaf.maxs[1] as f64 + 0.5);
        Rectangle::new([lo, hi], BLACK.stroke_width(1))
    }))?;

    chart.draw_series(
        cloud
            .axis_iter(Axis(0))
            .map(|p| Circle::new((p[0] as f64, p[1] as f64), 2, RED.filled())),
    )?;

    root.present()?;
    Ok(())
}
