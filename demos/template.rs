//! Renders a ring sundial template as SVG.
//!
//! Usage: `cargo run --example template [config.json] [out.svg]`

use log::info;
use svg::node::element::path::Data;
use svg::node::element::{Circle, ClipPath, Definitions, Group, Line, Path, Rectangle, Text};
use svg::Document;

use sundial_ring::{build_layout, quadratic_segments, Point, Result, RingLayout, SundialConfig};

const FACTOR: f64 = 16.0;
const OFFSET: f64 = 20.0;
const DOT_RADIUS: f64 = 2.5;

fn px(v: f64) -> f64 {
    OFFSET + v * FACTOR
}

fn pt(p: Point) -> (f32, f32) {
    (px(p.x) as f32, px(p.y) as f32)
}

fn label(content: &str) -> Text {
    Text::new(content)
}

fn outline(layout: &RingLayout) -> Group {
    let o = layout.outline;
    Group::new().add(
        Rectangle::new()
            .set("x", px(o.x))
            .set("y", px(o.y))
            .set("width", o.width * FACTOR)
            .set("height", o.height * FACTOR)
            .set("fill", "none")
            .set("stroke", "#000000"),
    )
}

fn angle_grid(layout: &RingLayout) -> Group {
    let mut group = Group::new()
        .set("stroke", "#000000")
        .set("font-size", 10)
        .set("font-family", "Arial");
    for line in &layout.angle_gridlines {
        group = group
            .add(
                Line::new()
                    .set("x1", px(line.x0))
                    .set("y1", px(line.y0))
                    .set("x2", px(line.x1))
                    .set("y2", px(line.y1)),
            )
            .add(
                label(&line.deg.to_string())
                    .set("x", px(line.x0) - 20.0)
                    .set("y", px(line.y0) + 5.0)
                    .set("stroke", "none"),
            );
    }
    group
}

fn month_grid(layout: &RingLayout) -> Group {
    let mut group = Group::new();
    let last = layout.month_gridlines.len().saturating_sub(1);
    for (i, line) in layout.month_gridlines.iter().enumerate() {
        let colour = if i % 2 == 0 { "#0099ff" } else { "#dfdfdf" };
        group = group.add(
            Line::new()
                .set("x1", px(line.x0))
                .set("y1", px(line.y0))
                .set("x2", px(line.x1))
                .set("y2", px(line.y1))
                .set("stroke", colour),
        );
        if line.label.is_empty() {
            continue;
        }
        let nudge = if i == 0 {
            8.0
        } else if i == last {
            -8.0
        } else {
            0.0
        };
        let (x, y) = (px(line.x1) + nudge, px(line.y1) + 10.0);
        group = group.add(
            label(&line.label)
                .set("x", x)
                .set("y", y)
                .set("transform", format!("rotate(-90 {} {})", x, y))
                .set("text-anchor", "end")
                .set("dominant-baseline", "middle")
                .set("font-size", 10)
                .set("font-family", "Arial")
                .set("fill", "#0099ff"),
        );
    }
    group
}

fn hour_curves(layout: &RingLayout) -> Result<Group> {
    let mut group = Group::new()
        .set("clip-path", "url(#dial-mask)")
        .set("font-size", 10)
        .set("font-family", "Arial")
        .set("text-anchor", "middle")
        .set("dominant-baseline", "middle");
    for track in &layout.hour_tracks {
        let mut data = Data::new().move_to(pt(track.points[0]));
        for segment in quadratic_segments(&track.points)? {
            let (cx, cy) = pt(segment.control);
            let (x, y) = pt(segment.end);
            data = data.quadratic_curve_to((cx, cy, x, y));
        }
        group = group.add(
            Path::new()
                .set("d", data)
                .set("fill", "none")
                .set("stroke", "blue")
                .set("stroke-width", 1),
        );
        for p in &track.points {
            group = group.add(
                Circle::new()
                    .set("cx", px(p.x))
                    .set("cy", px(p.y))
                    .set("r", DOT_RADIUS)
                    .set("fill", "tomato"),
            );
        }
        if let Some(last) = track.points.last() {
            group = group.add(
                label(&track.hour.to_string())
                    .set("x", px(last.x) + 10.0)
                    .set("y", px(last.y)),
            );
        }
    }
    Ok(group)
}

fn render(layout: &RingLayout) -> Result<Document> {
    let o = layout.outline;
    let mask = layout.dial_mask_region;
    let clip = ClipPath::new().set("id", "dial-mask").add(
        Rectangle::new()
            .set("x", px(mask.x))
            .set("y", px(mask.y))
            .set("width", mask.width * FACTOR)
            .set("height", mask.height * FACTOR),
    );
    let hole = Circle::new()
        .set("cx", px(layout.hole.x))
        .set("cy", px(layout.hole.y))
        .set("r", DOT_RADIUS)
        .set("fill", "gold");

    Ok(Document::new()
        .set("width", 2.0 * OFFSET + (o.width + 20.0) * FACTOR)
        .set("height", 2.0 * OFFSET + o.height * FACTOR)
        .add(Definitions::new().add(clip))
        .add(outline(layout))
        .add(angle_grid(layout))
        .add(month_grid(layout))
        .add(hour_curves(layout)?)
        .add(hole))
}

fn main() -> Result<()> {
    pretty_env_logger::init_timed();
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SundialConfig::from_path(path)?,
        None => SundialConfig::default(),
    };
    let out = args.next().unwrap_or_else(|| "ring.svg".to_string());

    info!("building layout for {} hours", config.sample_hours.len());
    let layout = build_layout(&config)?;
    svg::save(&out, &render(&layout)?)?;
    info!("template written to {}", out);
    Ok(())
}
