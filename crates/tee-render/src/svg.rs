//! SVG conversion for [`VisualParams`].
//!
//! The body is drawn at a fixed offset inside the canvas with the caption
//! below it. Overlays are clipped to the body outline.

use tee_preview::{
    AddonGlyph, BlendMode, Border, FinishKind, GlyphShape, LayeringOverlay, LineStyle,
    NecklineBand, PatternKind, PatternOverlay, SleevePanels, VisualParams,
};

/// Vertical offset of the garment body inside the canvas.
const BODY_TOP: f64 = 24.0;
/// Gap between the body and the caption row.
const CAPTION_GAP: f64 = 24.0;

/// Render a complete SVG document.
pub fn visual_to_svg(visual: &VisualParams, title: &str) -> String {
    let body = &visual.body;
    let (w, h) = (body.width, body.height);
    let canvas_w = visual.canvas.width;
    let canvas_h = visual.canvas.height;

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{canvas_w}\" height=\"{canvas_h}\" \
         viewBox=\"0 0 {canvas_w} {canvas_h}\" style=\"background:#fafaf9\">\n\
         <title>{}</title>\n",
        escape(title)
    );

    let outline = rounded_rect_path(0.0, 0.0, w, h, body.corner_radius.top, body.corner_radius.bottom);
    svg.push_str(&defs(visual, &outline));

    svg.push_str(&format!("<g transform=\"translate(0,{BODY_TOP})\">\n"));

    // Body with its drop shadow.
    svg.push_str(&format!(
        "  <path d=\"{outline}\" fill=\"{}\" filter=\"url(#shadow)\"/>\n",
        body.fill
    ));

    svg.push_str("  <g clip-path=\"url(#body-clip)\">\n");
    if let Some(pattern) = &visual.pattern {
        svg.push_str(&pattern_layer(pattern, w, h));
    }
    if let Some(finish) = &visual.finish {
        svg.push_str(&format!(
            "    <rect width=\"{w}\" height=\"{h}\" fill=\"url(#finish-{})\" opacity=\"{}\"/>\n",
            finish_id(finish.kind),
            fmt(finish.opacity)
        ));
    }
    svg.push_str(&neckline(&visual.neckline, w));
    if let Some(layering) = &visual.layering {
        svg.push_str(&layering_layer(layering, w, h));
    }
    svg.push_str(&sleeves(&visual.sleeves, w));

    let band = &visual.accent_band;
    svg.push_str(&format!(
        "    <rect x=\"0\" y=\"{}\" width=\"{w}\" height=\"{}\" rx=\"{}\" fill=\"{}\" \
         opacity=\"{}\"{}/>\n",
        fmt(h - band.bottom - band.height),
        fmt(band.height),
        fmt(band.height / 2.0),
        band.fill,
        fmt(band.opacity),
        blend_style(band.blend)
    ));

    for glyph in &visual.glyphs {
        svg.push_str(&glyph_group(glyph, w, h));
    }
    svg.push_str("  </g>\n");

    // Border last so overlays never cover it.
    svg.push_str(&format!(
        "  <path d=\"{outline}\" fill=\"none\"{}/>\n",
        stroke_attrs(&body.border)
    ));
    svg.push_str("</g>\n");

    let caption_y = BODY_TOP + h + CAPTION_GAP;
    svg.push_str(&format!(
        "<g font-family=\"sans-serif\" font-size=\"12\" fill=\"#a1a1aa\" letter-spacing=\"1\">\n\
         \x20 <text x=\"0\" y=\"{caption_y}\">{}</text>\n\
         \x20 <text x=\"{canvas_w}\" y=\"{caption_y}\" text-anchor=\"end\">{}</text>\n\
         </g>\n",
        escape(&visual.caption.fabric.to_uppercase()),
        escape(&visual.caption.fit.to_uppercase())
    ));

    svg.push_str("</svg>\n");
    svg
}

fn defs(visual: &VisualParams, outline: &str) -> String {
    let shadow = &visual.body.shadow;
    let mut defs = String::from("<defs>\n");
    defs.push_str(&format!(
        "  <clipPath id=\"body-clip\"><path d=\"{outline}\"/></clipPath>\n\
         \x20 <filter id=\"shadow\" x=\"-30%\" y=\"-30%\" width=\"160%\" height=\"180%\">\
         <feDropShadow dx=\"0\" dy=\"{}\" stdDeviation=\"{}\" flood-color=\"{}\"/></filter>\n",
        fmt(shadow.offset_y),
        fmt(shadow.blur / 2.0),
        shadow.color.css()
    ));

    if let Some(pattern) = &visual.pattern {
        defs.push_str(&pattern_defs(pattern));
    }
    if let Some(finish) = &visual.finish {
        defs.push_str(&finish_defs(finish.kind));
    }
    if let Some(dots) = visual.layering.as_ref().and_then(|l| l.dots.as_ref()) {
        defs.push_str(&format!(
            "  <pattern id=\"perforation\" width=\"{s}\" height=\"{s}\" patternUnits=\"userSpaceOnUse\">\
             <circle cx=\"{c}\" cy=\"{c}\" r=\"{}\" fill=\"{}\"/></pattern>\n",
            fmt(dots.radius),
            dots.color.css(),
            s = fmt(dots.spacing),
            c = fmt(dots.spacing / 2.0),
        ));
    }
    if visual.glyphs.iter().any(|g| is_filled(&g.shape)) {
        defs.push_str(
            "  <linearGradient id=\"glyph-fill\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">\
             <stop offset=\"0\" stop-color=\"#fff\" stop-opacity=\"0.35\"/>\
             <stop offset=\"1\" stop-color=\"#000\" stop-opacity=\"0.3\"/></linearGradient>\n",
        );
    }
    defs.push_str("</defs>\n");
    defs
}

fn pattern_defs(pattern: &PatternOverlay) -> String {
    match pattern.kind {
        PatternKind::Gradient => "  <linearGradient id=\"pattern-fill\" x1=\"0.2\" y1=\"0\" x2=\"0.8\" y2=\"1\">\
             <stop offset=\"0\" stop-color=\"#fff\" stop-opacity=\"0.25\"/>\
             <stop offset=\"1\" stop-color=\"#000\" stop-opacity=\"0.35\"/></linearGradient>\n"
            .to_string(),
        PatternKind::Colorblock => "  <linearGradient id=\"pattern-fill\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"0\">\
             <stop offset=\"0.4\" stop-color=\"#000\" stop-opacity=\"0.35\"/>\
             <stop offset=\"0.4\" stop-color=\"#fff\" stop-opacity=\"0.15\"/></linearGradient>\n"
            .to_string(),
        PatternKind::MicroPattern => {
            let tile = pattern.tile.unwrap_or(16.0);
            format!(
                "  <pattern id=\"pattern-fill\" width=\"{t}\" height=\"{t}\" patternUnits=\"userSpaceOnUse\">\
                 <circle cx=\"0\" cy=\"0\" r=\"1\" fill=\"rgba(255,255,255,0.45)\"/>\
                 <circle cx=\"{h}\" cy=\"{h}\" r=\"1\" fill=\"rgba(0,0,0,0.12)\"/></pattern>\n",
                t = fmt(tile),
                h = fmt(tile / 2.0),
            )
        }
        PatternKind::ArtPrint => "  <radialGradient id=\"pattern-fill\" cx=\"0.3\" cy=\"0.3\" r=\"0.4\">\
             <stop offset=\"0\" stop-color=\"#fff\" stop-opacity=\"0.65\"/>\
             <stop offset=\"1\" stop-color=\"#fff\" stop-opacity=\"0\"/></radialGradient>\n\
             \x20 <radialGradient id=\"pattern-fill-2\" cx=\"0.7\" cy=\"0.2\" r=\"0.35\">\
             <stop offset=\"0\" stop-color=\"#000\" stop-opacity=\"0.45\"/>\
             <stop offset=\"1\" stop-color=\"#000\" stop-opacity=\"0\"/></radialGradient>\n"
            .to_string(),
    }
}

fn pattern_layer(pattern: &PatternOverlay, w: f64, h: f64) -> String {
    let blend = blend_style(pattern.blend);
    let opacity = fmt(pattern.opacity);
    let mut layer = format!(
        "    <rect width=\"{w}\" height=\"{h}\" fill=\"url(#pattern-fill)\" opacity=\"{opacity}\"{blend}/>\n"
    );
    if pattern.kind == PatternKind::ArtPrint {
        layer.push_str(&format!(
            "    <rect width=\"{w}\" height=\"{h}\" fill=\"url(#pattern-fill-2)\" opacity=\"{opacity}\"{blend}/>\n"
        ));
    }
    layer
}

fn finish_id(kind: FinishKind) -> &'static str {
    match kind {
        FinishKind::Gloss => "gloss",
        FinishKind::Sheen => "sheen",
        FinishKind::Brushed => "brushed",
        FinishKind::Tech => "tech",
    }
}

fn finish_defs(kind: FinishKind) -> String {
    let id = finish_id(kind);
    match kind {
        FinishKind::Gloss => format!(
            "  <linearGradient id=\"finish-{id}\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"0.6\">\
             <stop offset=\"0\" stop-color=\"#fff\" stop-opacity=\"0.6\"/>\
             <stop offset=\"0.45\" stop-color=\"#fff\" stop-opacity=\"0\"/>\
             <stop offset=\"1\" stop-color=\"#000\" stop-opacity=\"0.25\"/></linearGradient>\n"
        ),
        FinishKind::Sheen => format!(
            "  <linearGradient id=\"finish-{id}\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"0\">\
             <stop offset=\"0\" stop-color=\"#fff\" stop-opacity=\"0.28\"/>\
             <stop offset=\"0.65\" stop-color=\"#fff\" stop-opacity=\"0\"/></linearGradient>\n"
        ),
        FinishKind::Brushed => format!(
            "  <pattern id=\"finish-{id}\" width=\"4\" height=\"4\" patternUnits=\"userSpaceOnUse\">\
             <rect width=\"1\" height=\"4\" fill=\"rgba(255,255,255,0.07)\"/></pattern>\n"
        ),
        FinishKind::Tech => format!(
            "  <pattern id=\"finish-{id}\" width=\"8\" height=\"8\" patternUnits=\"userSpaceOnUse\">\
             <rect width=\"8\" height=\"1\" fill=\"rgba(0,0,0,0.25)\"/></pattern>\n"
        ),
    }
}

fn neckline(band: &NecklineBand, body_width: f64) -> String {
    let x = (body_width - band.width) / 2.0;
    let d = rounded_rect_path(x, 0.0, band.width, band.height, 0.0, band.bottom_radius);
    let fill = band
        .fill
        .as_ref()
        .map_or_else(|| "none".to_string(), ToString::to_string);

    let mut group = format!(
        "    <g transform=\"rotate({} {} 0)\">\n      <path d=\"{d}\" fill=\"{fill}\"/>\n",
        fmt(band.rotation_deg),
        fmt(body_width / 2.0)
    );
    if let Some(border) = &band.bottom_border {
        // Only the lower edge carries the band color.
        let inset = band.bottom_radius.min(band.width / 2.0);
        let y = band.height - border.width / 2.0;
        group.push_str(&format!(
            "      <path d=\"M {} {} Q {} {} {} {} L {} {} Q {} {} {} {}\" fill=\"none\"{}/>\n",
            fmt(x),
            fmt(y - inset),
            fmt(x),
            fmt(y),
            fmt(x + inset),
            fmt(y),
            fmt(x + band.width - inset),
            fmt(y),
            fmt(x + band.width),
            fmt(y),
            fmt(x + band.width),
            fmt(y - inset),
            stroke_attrs(border)
        ));
    }
    group.push_str("    </g>\n");
    group
}

fn layering_layer(layering: &LayeringOverlay, w: f64, h: f64) -> String {
    let inset = layering.inset;
    let fill = if layering.dots.is_some() {
        "url(#perforation)"
    } else {
        "none"
    };
    format!(
        "    <rect x=\"{i}\" y=\"{i}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{fill}\" \
         opacity=\"{}\"{}/>\n",
        fmt(w - 2.0 * inset),
        fmt(h - 2.0 * inset),
        fmt(layering.corner_radius),
        fmt(layering.opacity),
        stroke_attrs(&layering.border),
        i = fmt(inset),
    )
}

fn sleeves(panels: &SleevePanels, body_width: f64) -> String {
    let top = panels.top;
    let right_x = body_width - panels.width;
    let panel = |x: f64, rotation: f64| {
        format!(
            "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\"{} \
             transform=\"rotate({} {} {})\"/>\n",
            fmt(x),
            fmt(top),
            fmt(panels.width),
            fmt(panels.height),
            fmt(panels.corner_radius.min(panels.height / 2.0)),
            panels.fill,
            stroke_attrs(&panels.border),
            fmt(rotation),
            fmt(x + panels.width / 2.0),
            fmt(top + panels.height / 2.0),
        )
    };
    let mut out = panel(0.0, panels.left_rotation_deg);
    out.push_str(&panel(right_x, panels.right_rotation_deg));
    out
}

fn glyph_group(glyph: &AddonGlyph, body_w: f64, body_h: f64) -> String {
    let (x, y) = glyph.anchor.resolve(body_w, body_h, glyph.shape.extent());
    let color = &glyph.color;
    let mut group = format!(
        "    <g id=\"addon-{}\" transform=\"translate({},{})\" opacity=\"{}\">\n",
        glyph.id,
        fmt(x),
        fmt(y),
        fmt(glyph.opacity)
    );

    match glyph.shape {
        GlyphShape::Glints {
            count,
            diameter,
            gap,
        } => {
            let r = diameter / 2.0;
            for i in 0..count {
                let cx = r + f64::from(i) * (diameter + gap);
                group.push_str(&format!(
                    "      <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{color}\" opacity=\"0.8\"/>\n",
                    fmt(cx),
                    fmt(r),
                    fmt(r)
                ));
            }
        }
        GlyphShape::Bar { length, width } => {
            group.push_str(&format!(
                "      <rect width=\"{}\" height=\"{}\" fill=\"{color}\"/>\n",
                fmt(width),
                fmt(length)
            ));
        }
        GlyphShape::Pocket {
            width,
            height,
            radius,
            filled,
        } => {
            group.push_str(&format!(
                "      <rect x=\"1\" y=\"1\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\" \
                 stroke=\"{color}\" stroke-width=\"2\"/>\n",
                fmt(width - 2.0),
                fmt(height - 2.0),
                fmt(radius),
                glyph_fill(filled)
            ));
        }
        GlyphShape::Stitches { font_size, .. } => {
            let text = glyph.shape.text().unwrap_or_default();
            group.push_str(&format!(
                "      <text y=\"{}\" font-size=\"{}\" font-weight=\"600\" fill=\"{color}\">{}</text>\n",
                fmt(font_size * 0.85),
                fmt(font_size),
                escape(&text)
            ));
        }
        GlyphShape::Panel {
            width,
            height,
            radius,
            filled,
            glow,
        } => {
            if glow {
                group.push_str(&format!(
                    "      <rect width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"rgba(17,17,19,0.2)\" \
                     transform=\"translate(0,4)\"/>\n",
                    fmt(width),
                    fmt(height),
                    fmt(radius)
                ));
            }
            group.push_str(&format!(
                "      <rect width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\" stroke=\"{color}\" \
                 stroke-width=\"1\" stroke-dasharray=\"4 3\"/>\n",
                fmt(width),
                fmt(height),
                fmt(radius),
                glyph_fill(filled)
            ));
        }
        GlyphShape::Grid {
            cells,
            columns,
            cell_size,
            gap,
            filled,
        } => {
            let columns = columns.max(1);
            for i in 0..cells {
                let cx = f64::from(i % columns) * (cell_size + gap);
                let cy = f64::from(i / columns) * (cell_size + gap);
                group.push_str(&format!(
                    "      <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"6\" fill=\"{}\" \
                     stroke=\"{color}\" stroke-width=\"1.5\"/>\n",
                    fmt(cx),
                    fmt(cy),
                    fmt(cell_size),
                    fmt(cell_size),
                    glyph_fill(filled)
                ));
            }
        }
    }

    group.push_str("    </g>\n");
    group
}

fn is_filled(shape: &GlyphShape) -> bool {
    matches!(
        shape,
        GlyphShape::Pocket { filled: true, .. }
            | GlyphShape::Panel { filled: true, .. }
            | GlyphShape::Grid { filled: true, .. }
    )
}

fn glyph_fill(filled: bool) -> &'static str {
    if filled {
        "url(#glyph-fill)"
    } else {
        "none"
    }
}

fn stroke_attrs(border: &Border) -> String {
    let dash = match border.style {
        LineStyle::Solid => "",
        LineStyle::Dashed => " stroke-dasharray=\"4 3\"",
    };
    format!(
        " stroke=\"{}\" stroke-width=\"{}\"{dash}",
        border.paint.css(),
        fmt(border.width)
    )
}

fn blend_style(blend: BlendMode) -> &'static str {
    match blend {
        BlendMode::Normal => "",
        BlendMode::Overlay => " style=\"mix-blend-mode:overlay\"",
        BlendMode::HardLight => " style=\"mix-blend-mode:hard-light\"",
        BlendMode::Multiply => " style=\"mix-blend-mode:multiply\"",
    }
}

/// Rectangle path with separate top and bottom corner radii.
fn rounded_rect_path(x: f64, y: f64, w: f64, h: f64, top: f64, bottom: f64) -> String {
    let top = top.min(w / 2.0).min(h / 2.0).max(0.0);
    let bottom = bottom.min(w / 2.0).min(h / 2.0).max(0.0);
    let (x2, y2) = (x + w, y + h);
    format!(
        "M {} {} H {} Q {} {} {} {} V {} Q {} {} {} {} H {} Q {} {} {} {} V {} Q {} {} {} {} Z",
        fmt(x + top),
        fmt(y),
        fmt(x2 - top),
        fmt(x2),
        fmt(y),
        fmt(x2),
        fmt(y + top),
        fmt(y2 - bottom),
        fmt(x2),
        fmt(y2),
        fmt(x2 - bottom),
        fmt(y2),
        fmt(x + bottom),
        fmt(x),
        fmt(y2),
        fmt(x),
        fmt(y2 - bottom),
        fmt(y + top),
        fmt(x),
        fmt(y),
        fmt(x + top),
        fmt(y),
    )
}

/// Two decimals, trailing zeros dropped.
fn fmt(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tee_preview::map_to_visual;
    use tee_types::{
        AddonId, AddonUpdate, Configuration, FieldEdit, Layering, MaterialFinish, OptionSet,
        Pattern, Percent,
    };

    fn with_all_addons(intensity: i64) -> Configuration {
        AddonId::known().iter().fold(Configuration::default(), |c, id| {
            c.with_addon(
                id,
                &AddonUpdate {
                    enabled: Some(true),
                    intensity: Some(Percent::new(intensity)),
                    placement: None,
                },
            )
        })
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(fmt(72.0), "72");
        assert_eq!(fmt(0.65), "0.65");
        assert_eq!(fmt(1.5), "1.5");
        assert_eq!(fmt(-0.001), "0");
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape("A & <B>"), "A &amp; &lt;B&gt;");
    }

    #[test]
    fn default_render_has_body_and_no_optional_layers() {
        let svg = visual_to_svg(&map_to_visual(&Configuration::default()), "Default");
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("fill=\"#111113\""));
        assert!(svg.contains("<title>Default</title>"));
        assert!(!svg.contains("pattern-fill"));
        assert!(!svg.contains("finish-"));
        assert!(!svg.contains("perforation"));
        assert!(!svg.contains("addon-"));
        assert!(svg.contains("ORGANIC COTTON"));
    }

    #[test]
    fn every_glyph_shape_is_drawn() {
        let svg = visual_to_svg(&map_to_visual(&with_all_addons(90)), "Loaded");
        for id in AddonId::known() {
            assert!(svg.contains(&format!("id=\"addon-{}\"", id.key())), "{id}");
        }
        assert!(svg.contains("×"));
        assert!(svg.contains("url(#glyph-fill)"));
        assert!(svg.contains("id=\"glyph-fill\""));
    }

    #[test]
    fn faint_glyphs_need_no_fill_gradient() {
        let svg = visual_to_svg(&map_to_visual(&with_all_addons(0)), "Faint");
        assert!(!svg.contains("glyph-fill"));
    }

    #[test]
    fn overlays_appear_when_configured() {
        let config = Configuration::default()
            .apply(FieldEdit::Pattern(Pattern::ArtPrint))
            .apply(FieldEdit::MaterialFinish(MaterialFinish::Gloss))
            .apply(FieldEdit::Layering(Layering::Perforated));
        let svg = visual_to_svg(&map_to_visual(&config), "Layers");
        assert!(svg.contains("url(#pattern-fill-2)"));
        assert!(svg.contains("mix-blend-mode:hard-light"));
        assert!(svg.contains("id=\"finish-gloss\""));
        assert!(svg.contains("url(#perforation)"));
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn title_is_escaped_in_document() {
        let svg = visual_to_svg(&map_to_visual(&Configuration::default()), "Fish & <Chips>");
        assert!(svg.contains("<title>Fish &amp; &lt;Chips&gt;</title>"));
    }
}
