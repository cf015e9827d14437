use std::time::Instant;

use log::debug;

use crate::{
    chart,
    core::{
        bounds::{Axis, graph_dims, terminal_geometry},
        color::AnsiCode,
        config::Config,
        error::PlotError,
        range::FloatRange,
    },
    default_title,
    render::Renderer,
};

use super::parse::Cli;

pub fn plot(a: &Cli) -> Result<(), PlotError> {
    let (min, max) = (a.range_min, a.range_max);
    if min > max {
        return Err(PlotError::InvalidRange { min, max });
    }

    // config
    let count = FloatRange::within(min, max).size_hint().0;
    let (x_lo, x_hi) = Axis::X.bounds(min, max);
    let (x_chars, y_chars) = graph_dims(terminal_geometry());
    let cfg = Config::builder(x_chars, y_chars)
        .title_opt(title(a))
        .subtitle(subtitle(count))
        .x_range(x_lo, x_hi)
        .width_factor(a.width_factor)
        .color(AnsiCode::from_name(&a.color)?)
        .build()?;

    // enumerate + classify + rasterise
    let t_chart = Instant::now();
    let plot = chart(min, max, &cfg)?;
    let dur_chart = t_chart.elapsed().as_micros();

    let t_render = Instant::now();
    Renderer::new().render(&cfg, &plot)?;
    debug!(
        "chart: {dur_chart} µs   render: {} µs   ({count} values, {x_chars}×{y_chars} cells)",
        t_render.elapsed().as_micros()
    );
    Ok(())
}

/// `--noTitle` wins over `--title`; an empty title means the default one.
fn title(a: &Cli) -> Option<String> {
    if a.no_title {
        None
    } else if a.title.is_empty() {
        Some(default_title(a.range_min, a.range_max))
    } else {
        Some(a.title.clone())
    }
}

fn subtitle(count: usize) -> String {
    if count == 1 {
        "1 value".to_owned()
    } else {
        format!("{count} values")
    }
}
