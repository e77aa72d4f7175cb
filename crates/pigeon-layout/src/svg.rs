//! Debug SVG output for a computed [`PedigreeLayout`].
//!
//! Only reads the layout model; all geometry decisions live in [`crate::compute_layout`].

use crate::model::{
    BoxRect, EdgeStyle, LineRole, PedigreeLayout, Segment, SlotLayout, SlotRender,
};
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Adds extra space around the drawing area.
    pub viewbox_padding: f64,
    /// Draw boxes of unknown ancestors (blank pedigree templates).
    pub include_empty_boxes: bool,
    pub include_connectors: bool,
    /// Label each box with its slot index.
    pub include_slot_index_labels: bool,
    /// Font size as a share of the box line height.
    pub font_scale: f64,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            viewbox_padding: 8.0,
            include_empty_boxes: true,
            include_connectors: true,
            include_slot_index_labels: false,
            font_scale: 0.75,
        }
    }
}

pub fn render_pedigree_debug_svg(layout: &PedigreeLayout, options: &SvgRenderOptions) -> String {
    let pad = options.viewbox_padding.max(0.0);
    let min_x = -pad;
    let min_y = layout.start_y - pad;
    let width = layout.usable_width + 2.0 * pad;
    let height = layout.usable_height + 2.0 * pad;

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        fmt(min_x),
        fmt(min_y),
        fmt(width),
        fmt(height),
        fmt(width),
        fmt(height)
    );
    out.push_str(
        r#"<style>.box{fill:#fff;stroke-width:0.6}.connector{stroke:#000;stroke-width:0.4;fill:none}text{font-family:sans-serif;fill:#000}.slot-index{fill:#999}</style>"#,
    );

    if options.include_connectors {
        out.push_str(r#"<g class="connectors">"#);
        for slot in &layout.slots {
            if !slot_visible(slot, options) {
                continue;
            }
            for segment in slot.connectors() {
                render_segment(&mut out, segment);
            }
        }
        out.push_str("</g>");
    }

    out.push_str(r#"<g class="slots">"#);
    for slot in &layout.slots {
        if !slot_visible(slot, options) {
            continue;
        }
        render_slot(&mut out, slot, options);
    }
    out.push_str("</g></svg>\n");
    out
}

fn slot_visible(slot: &SlotLayout, options: &SvgRenderOptions) -> bool {
    if slot.render == SlotRender::Hidden || slot.rect.is_empty() {
        return false;
    }
    slot.pigeon.is_some() || options.include_empty_boxes
}

fn render_segment(out: &mut String, segment: &Segment) {
    let _ = write!(
        out,
        r#"<line class="connector" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
        fmt(segment.x1),
        fmt(segment.y1),
        fmt(segment.x2),
        fmt(segment.y2)
    );
}

fn render_slot(out: &mut String, slot: &SlotLayout, options: &SvgRenderOptions) {
    let BoxRect {
        x,
        y,
        width,
        height,
    } = slot.rect;
    let _ = write!(
        out,
        r#"<g class="slot" data-index="{}" data-generation="{}">"#,
        slot.index, slot.generation
    );
    let _ = write!(
        out,
        r#"<rect class="box" x="{}" y="{}" width="{}" height="{}" stroke="{}"/>"#,
        fmt(x),
        fmt(y),
        fmt(width),
        fmt(height),
        edge_color(slot.edge)
    );

    let font_size = slot.line_height * options.font_scale;
    let text_pad = slot.line_height * 0.2;

    if let SlotRender::Image { path: Some(path) } = &slot.render {
        let _ = write!(
            out,
            r#"<image href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet"/>"#,
            escape_xml(&path.to_string_lossy()),
            fmt(x),
            fmt(y),
            fmt(width),
            fmt(height)
        );
    }

    for (row, line) in slot.lines.iter().enumerate() {
        let baseline = y + slot.line_height * (row as f64 + 0.8);
        let _ = write!(
            out,
            r#"<text class="{}" x="{}" y="{}" font-size="{}">{}</text>"#,
            line_class(line.role),
            fmt(x + text_pad),
            fmt(baseline),
            fmt(font_size),
            escape_xml(&line.text)
        );
    }

    if let Some(sign) = slot.sex_sign {
        let _ = write!(
            out,
            r#"<text class="sex-sign" x="{}" y="{}" font-size="{}" text-anchor="end">{}</text>"#,
            fmt(x + width - text_pad),
            fmt(y + slot.line_height * 0.8),
            fmt(font_size),
            sign
        );
    }

    if options.include_slot_index_labels {
        let _ = write!(
            out,
            r#"<text class="slot-index" x="{}" y="{}" font-size="{}" text-anchor="end">{}</text>"#,
            fmt(x + width - text_pad),
            fmt(y + height - text_pad),
            fmt(font_size * 0.6),
            slot.index
        );
    }
    out.push_str("</g>");
}

fn line_class(role: LineRole) -> &'static str {
    match role {
        LineRole::Band => "band",
        LineRole::TopRight => "top-right",
        LineRole::MiddleLeft => "middle-left",
        LineRole::MiddleRight => "middle-right",
        LineRole::BottomLeft => "bottom-left",
        LineRole::Extra(_) => "extra",
    }
}

fn edge_color(edge: EdgeStyle) -> &'static str {
    match edge {
        EdgeStyle::Plain => "#000000",
        EdgeStyle::Cock => "#1f4e9c",
        EdgeStyle::Hen => "#c2185b",
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn fmt(v: f64) -> String {
    if !v.is_finite() || v.abs() < 0.0005 {
        return "0".to_string();
    }
    let mut s = format!("{:.3}", (v * 1000.0).round() / 1000.0);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}
