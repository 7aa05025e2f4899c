use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::geometry::{FONT_SIZE, PlotArea};
use crate::domain::errors::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    fn as_canvas(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: String,
    pub align: TextAlign,
    /// Rotated a quarter turn counter-clockwise around the anchor.
    pub vertical: bool,
}

impl TextStyle {
    pub fn new(color: &str, align: TextAlign) -> Self {
        Self { color: color.to_string(), align, vertical: false }
    }

    pub fn vertical(mut self) -> Self {
        self.vertical = true;
        self
    }
}

/// Minimal 2D drawing backend the chart renderer paints through.
/// Backend failures surface as `ChartError::Rendering`.
pub trait DrawSurface {
    fn clear(&mut self, width: f64, height: f64) -> ChartResult<()>;
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str, alpha: f64) -> ChartResult<()>;
    fn polyline(&mut self, points: &[(f64, f64)], color: &str, width: f64, dashed: bool) -> ChartResult<()>;
    fn polygon(&mut self, points: &[(f64, f64)], color: &str, alpha: f64) -> ChartResult<()>;
    fn circle(&mut self, x: f64, y: f64, radius: f64, fill: &str, stroke: &str) -> ChartResult<()>;
    fn text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> ChartResult<()>;
    /// Restrict drawing to `area`, or lift the restriction with `None`.
    fn clip(&mut self, area: Option<PlotArea>) -> ChartResult<()>;
}

fn canvas_error(error: JsValue) -> ChartError {
    ChartError::Rendering(format!("{error:?}"))
}

/// `DrawSurface` over a canvas 2D context.
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    clipped: bool,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self { context, clipped: false }
    }

    /// Resize `canvas` and take its 2D context.
    pub fn from_canvas(canvas: &HtmlCanvasElement, width: u32, height: u32) -> ChartResult<Self> {
        canvas.set_width(width);
        canvas.set_height(height);
        let context = canvas
            .get_context("2d")
            .map_err(|e| ChartError::Rendering(format!("{e:?}")))?
            .ok_or_else(|| ChartError::Rendering("canvas has no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::Rendering("failed to cast to 2d context".to_string()))?;
        Ok(Self::new(context))
    }

    /// Find a canvas in the document by id.
    pub fn from_element_id(canvas_id: &str, width: u32, height: u32) -> ChartResult<Self> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(canvas_id))
            .ok_or_else(|| ChartError::Rendering(format!("canvas '{canvas_id}' not found")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ChartError::Rendering(format!("element '{canvas_id}' is not a canvas")))?;
        Self::from_canvas(&canvas, width, height)
    }

    fn trace(&self, points: &[(f64, f64)]) {
        self.context.begin_path();
        for (i, &(x, y)) in points.iter().enumerate() {
            if i == 0 {
                self.context.move_to(x, y);
            } else {
                self.context.line_to(x, y);
            }
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) -> ChartResult<()> {
        self.context.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str, alpha: f64) -> ChartResult<()> {
        self.context.set_global_alpha(alpha);
        self.context.set_fill_style_str(color);
        self.context.fill_rect(x, y, width, height);
        self.context.set_global_alpha(1.0);
        Ok(())
    }

    fn polyline(&mut self, points: &[(f64, f64)], color: &str, width: f64, dashed: bool) -> ChartResult<()> {
        if points.len() < 2 || width <= 0.0 {
            return Ok(());
        }
        let dash = match dashed {
            true => js_sys::Array::of2(&JsValue::from_f64(3.0), &JsValue::from_f64(3.0)),
            false => js_sys::Array::new(),
        };
        self.context.set_line_dash(&dash).map_err(canvas_error)?;
        self.context.set_stroke_style_str(color);
        self.context.set_line_width(width);
        self.trace(points);
        self.context.stroke();
        self.context.set_line_dash(&js_sys::Array::new()).map_err(canvas_error)
    }

    fn polygon(&mut self, points: &[(f64, f64)], color: &str, alpha: f64) -> ChartResult<()> {
        if points.len() < 3 {
            return Ok(());
        }
        self.context.set_global_alpha(alpha);
        self.context.set_fill_style_str(color);
        self.trace(points);
        self.context.close_path();
        self.context.fill();
        self.context.set_global_alpha(1.0);
        Ok(())
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64, fill: &str, stroke: &str) -> ChartResult<()> {
        self.context.begin_path();
        self.context.arc(x, y, radius, 0.0, std::f64::consts::TAU).map_err(canvas_error)?;
        self.context.set_fill_style_str(fill);
        self.context.fill();
        self.context.set_stroke_style_str(stroke);
        self.context.set_line_width(1.0);
        self.context.stroke();
        Ok(())
    }

    fn text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> ChartResult<()> {
        self.context.set_font(&format!("{FONT_SIZE}px sans-serif"));
        self.context.set_fill_style_str(&style.color);
        self.context.set_text_align(style.align.as_canvas());
        self.context.set_text_baseline("middle");
        if !style.vertical {
            return self.context.fill_text(text, x, y).map_err(canvas_error);
        }
        self.context.save();
        let drawn = self
            .context
            .translate(x, y)
            .and_then(|_| self.context.rotate(-std::f64::consts::FRAC_PI_2))
            .and_then(|_| self.context.fill_text(text, 0.0, 0.0));
        self.context.restore();
        drawn.map_err(canvas_error)
    }

    fn clip(&mut self, area: Option<PlotArea>) -> ChartResult<()> {
        if self.clipped {
            self.context.restore();
            self.clipped = false;
        }
        if let Some(area) = area {
            self.context.save();
            self.context.begin_path();
            self.context.rect(area.left, area.top, area.width, area.height);
            self.context.clip();
            self.clipped = true;
        }
        Ok(())
    }
}

/// One call made against a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect { x: f64, y: f64, width: f64, height: f64, color: String },
    Polyline { points: Vec<(f64, f64)>, color: String, width: f64, dashed: bool },
    Polygon { points: Vec<(f64, f64)>, color: String },
    Circle { x: f64, y: f64, radius: f64, fill: String },
    Text { text: String, x: f64, y: f64, vertical: bool },
    Clip(Option<PlotArea>),
}

/// Surface that remembers what was drawn instead of drawing it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn polylines(&self) -> Vec<&DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Polyline { .. })).collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, _width: f64, _height: f64) -> ChartResult<()> {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str, _alpha: f64) -> ChartResult<()> {
        self.commands.push(DrawCommand::Rect { x, y, width, height, color: color.to_string() });
        Ok(())
    }

    fn polyline(&mut self, points: &[(f64, f64)], color: &str, width: f64, dashed: bool) -> ChartResult<()> {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            color: color.to_string(),
            width,
            dashed,
        });
        Ok(())
    }

    fn polygon(&mut self, points: &[(f64, f64)], color: &str, _alpha: f64) -> ChartResult<()> {
        self.commands.push(DrawCommand::Polygon { points: points.to_vec(), color: color.to_string() });
        Ok(())
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64, fill: &str, _stroke: &str) -> ChartResult<()> {
        self.commands.push(DrawCommand::Circle { x, y, radius, fill: fill.to_string() });
        Ok(())
    }

    fn text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> ChartResult<()> {
        self.commands.push(DrawCommand::Text { text: text.to_string(), x, y, vertical: style.vertical });
        Ok(())
    }

    fn clip(&mut self, area: Option<PlotArea>) -> ChartResult<()> {
        self.commands.push(DrawCommand::Clip(area));
        Ok(())
    }
}
