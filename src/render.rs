//! Turns a rotation angle and a [`DisplayConfig`] into a list of primitive
//! drawing commands. Nothing here touches a `PaintCtx`, so the geometry can be
//! checked without a window.

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::kurbo::{Circle, Line};
use druid::{Affine, Color, Point, Rect, Size, Vec2};

use crate::style::{DisplayConfig, IndicatorStyle};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// DrawCommand
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Debug)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillCircle {
        circle: Circle,
        color: Color,
    },
    StrokeLine {
        line: Line,
        color: Color,
        width: f64,
        round_cap: bool,
    },
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// DialGeometry
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DialGeometry {
    pub size: Size,
    pub center: Point,
    /// Radius of the circle inscribed in the widget.
    pub radius: f64,
}

impl DialGeometry {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            center: Point::new(size.width / 2.0, size.height / 2.0),
            radius: size.width.min(size.height) / 2.0,
        }
    }

    pub fn diagonal(&self) -> f64 {
        self.size.width.hypot(self.size.height)
    }

    /// Maps pointer-local coordinates (origin at the center, pointer along +x)
    /// to widget coordinates for a clockwise rotation of `degrees`.
    pub fn pointer_transform(&self, degrees: f64) -> Affine {
        Affine::translate(self.center.to_vec2()) * Affine::rotate(degrees.to_radians())
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// DialPainter
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub trait DialPainter {
    fn background(&self, geometry: &DialGeometry, config: &DisplayConfig) -> DrawCommand;

    /// Half lengths of the horizontal and vertical axis guides.
    fn axis_half_extents(&self, geometry: &DialGeometry) -> (f64, f64);

    fn pointer(&self, geometry: &DialGeometry, degrees: f64, config: &DisplayConfig) -> Vec<DrawCommand>;
}

pub struct HorizontalDial;
pub struct VerticalDial;
pub struct RectDial;

impl IndicatorStyle {
    pub fn painter(&self) -> &'static dyn DialPainter {
        match self {
            IndicatorStyle::Horizontal => &HorizontalDial,
            IndicatorStyle::Vertical => &VerticalDial,
            IndicatorStyle::Rect => &RectDial,
        }
    }
}

fn circle_background(geometry: &DialGeometry, config: &DisplayConfig) -> DrawCommand {
    DrawCommand::FillCircle {
        circle: Circle::new(geometry.center, geometry.radius),
        color: config.background_color.clone(),
    }
}

fn pointer_line(transform: Affine, from: Point, to: Point, config: &DisplayConfig) -> DrawCommand {
    DrawCommand::StrokeLine {
        line: Line::new(transform * from, transform * to),
        color: config.pointer_color.clone(),
        width: config.pointer_width,
        round_cap: true,
    }
}

fn diameter(transform: Affine, half_length: f64, config: &DisplayConfig) -> DrawCommand {
    pointer_line(
        transform,
        Point::new(-half_length, 0.0),
        Point::new(half_length, 0.0),
        config,
    )
}

impl DialPainter for HorizontalDial {
    fn background(&self, geometry: &DialGeometry, config: &DisplayConfig) -> DrawCommand {
        circle_background(geometry, config)
    }

    fn axis_half_extents(&self, geometry: &DialGeometry) -> (f64, f64) {
        (geometry.radius, geometry.radius)
    }

    fn pointer(&self, geometry: &DialGeometry, degrees: f64, config: &DisplayConfig) -> Vec<DrawCommand> {
        let transform = geometry.pointer_transform(degrees);
        let tick = pointer_line(
            transform,
            Point::ORIGIN,
            Point::new(0.0, -geometry.radius / 3.0),
            config,
        );
        vec![tick, diameter(transform, geometry.radius, config)]
    }
}

impl DialPainter for VerticalDial {
    fn background(&self, geometry: &DialGeometry, config: &DisplayConfig) -> DrawCommand {
        circle_background(geometry, config)
    }

    fn axis_half_extents(&self, geometry: &DialGeometry) -> (f64, f64) {
        (geometry.radius, geometry.radius)
    }

    fn pointer(&self, geometry: &DialGeometry, degrees: f64, config: &DisplayConfig) -> Vec<DrawCommand> {
        // 0° is 12 o'clock.
        let transform = geometry.pointer_transform(degrees - 90.0);
        let marker = DrawCommand::FillCircle {
            circle: Circle::new(transform * Point::new(geometry.radius, 0.0), config.pointer_width * 1.5),
            color: config.pointer_color.clone(),
        };
        vec![marker, diameter(transform, geometry.radius, config)]
    }
}

impl DialPainter for RectDial {
    fn background(&self, geometry: &DialGeometry, config: &DisplayConfig) -> DrawCommand {
        DrawCommand::FillRect {
            rect: geometry.size.to_rect(),
            color: config.background_color.clone(),
        }
    }

    fn axis_half_extents(&self, geometry: &DialGeometry) -> (f64, f64) {
        (geometry.size.width / 2.0, geometry.size.height / 2.0)
    }

    fn pointer(&self, geometry: &DialGeometry, degrees: f64, config: &DisplayConfig) -> Vec<DrawCommand> {
        let transform = geometry.pointer_transform(degrees);
        vec![diameter(transform, geometry.diagonal() / 2.0, config)]
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Render
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Background first, then the axis guides, then the pointer on top.
pub fn render(degrees: f64, config: &DisplayConfig, size: Size) -> Vec<DrawCommand> {
    let geometry = DialGeometry::new(size);
    let painter = config.style.painter();

    let mut commands = vec![painter.background(&geometry, config)];

    let (half_width, half_height) = painter.axis_half_extents(&geometry);
    if config.horizontal_axis {
        let offset = Vec2::new(half_width, 0.0);
        commands.push(axis_line(geometry.center - offset, geometry.center + offset, config));
    }
    if config.vertical_axis {
        let offset = Vec2::new(0.0, half_height);
        commands.push(axis_line(geometry.center - offset, geometry.center + offset, config));
    }

    commands.extend(painter.pointer(&geometry, degrees, config));
    commands
}

fn axis_line(from: Point, to: Point, config: &DisplayConfig) -> DrawCommand {
    DrawCommand::StrokeLine {
        line: Line::new(from, to),
        color: config.axis_color.clone(),
        width: config.axis_width,
        round_cap: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn assert_point(actual: Point, expected: (f64, f64)) {
        assert!(
            (actual.x - expected.0).abs() < EPSILON && (actual.y - expected.1).abs() < EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    fn config(style: IndicatorStyle) -> DisplayConfig {
        DisplayConfig {
            style,
            ..DisplayConfig::default()
        }
    }

    fn lines(commands: &[DrawCommand]) -> Vec<(Line, bool)> {
        commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::StrokeLine { line, round_cap, .. } => Some((*line, *round_cap)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn rect_pointer_spans_the_diagonal() {
        let commands = render(0.0, &config(IndicatorStyle::Rect), Size::new(100.0, 100.0));
        let pointer = commands.last().unwrap();
        match pointer {
            DrawCommand::StrokeLine { line, round_cap, .. } => {
                let half = 50.0 * 2f64.sqrt();
                assert_point(line.p0, (50.0 - half, 50.0));
                assert_point(line.p1, (50.0 + half, 50.0));
                assert!((half - 70.7).abs() < 0.01);
                assert!(round_cap);
            }
            other => panic!("unexpected pointer command {:?}", other),
        }
    }

    #[test]
    fn rect_background_fills_the_widget() {
        let commands = render(33.0, &config(IndicatorStyle::Rect), Size::new(80.0, 40.0));
        match &commands[0] {
            DrawCommand::FillRect { rect, .. } => assert_eq!(*rect, Rect::new(0.0, 0.0, 80.0, 40.0)),
            other => panic!("unexpected background {:?}", other),
        }
        // Axis guides cover the full rectangle.
        let axes = lines(&commands);
        assert_point(axes[0].0.p0, (0.0, 20.0));
        assert_point(axes[0].0.p1, (80.0, 20.0));
        assert_point(axes[1].0.p0, (40.0, 0.0));
        assert_point(axes[1].0.p1, (40.0, 40.0));
    }

    #[test]
    fn horizontal_dial_uses_inscribed_circle() {
        let commands = render(0.0, &config(IndicatorStyle::Horizontal), Size::new(200.0, 100.0));
        match &commands[0] {
            DrawCommand::FillCircle { circle, .. } => {
                assert_point(circle.center, (100.0, 50.0));
                assert_eq!(circle.radius, 50.0);
            }
            other => panic!("unexpected background {:?}", other),
        }

        let lines = lines(&commands);
        // Two axes, the tick, the diameter.
        assert_eq!(lines.len(), 4);
        assert_point(lines[0].0.p0, (50.0, 50.0));
        assert_point(lines[0].0.p1, (150.0, 50.0));
        assert!(!lines[0].1);

        let (tick, diameter) = (lines[2].0, lines[3].0);
        assert_point(tick.p0, (100.0, 50.0));
        assert_point(tick.p1, (100.0, 50.0 - 50.0 / 3.0));
        assert_point(diameter.p0, (50.0, 50.0));
        assert_point(diameter.p1, (150.0, 50.0));
    }

    #[test]
    fn horizontal_dial_rotates_clockwise() {
        let commands = render(90.0, &config(IndicatorStyle::Horizontal), Size::new(100.0, 100.0));
        let diameter = lines(&commands).last().unwrap().0;
        // The +x end swings down to 6 o'clock.
        assert_point(diameter.p1, (50.0, 100.0));
        assert_point(diameter.p0, (50.0, 0.0));
    }

    #[test]
    fn vertical_dial_starts_at_twelve_oclock() {
        let config = config(IndicatorStyle::Vertical);
        let commands = render(0.0, &config, Size::new(100.0, 100.0));
        let marker = commands
            .iter()
            .find_map(|command| match command {
                DrawCommand::FillCircle { circle, .. } if circle.radius != 50.0 => Some(*circle),
                _ => None,
            })
            .unwrap();
        assert_point(marker.center, (50.0, 0.0));
        assert_eq!(marker.radius, config.pointer_width * 1.5);

        let commands = render(90.0, &config, Size::new(100.0, 100.0));
        let diameter = lines(&commands).last().unwrap().0;
        assert_point(diameter.p1, (100.0, 50.0));
    }

    #[test]
    fn axis_guides_toggle_independently() {
        let mut config = config(IndicatorStyle::Horizontal);
        config.horizontal_axis = false;
        let commands = render(0.0, &config, Size::new(100.0, 100.0));
        let lines = lines(&commands);
        assert_eq!(lines.len(), 3);
        // Remaining guide is the vertical one.
        assert_point(lines[0].0.p0, (50.0, 0.0));
        assert_point(lines[0].0.p1, (50.0, 100.0));

        config.vertical_axis = false;
        assert_eq!(render(0.0, &config, Size::new(100.0, 100.0)).len(), 3);
    }

    #[test]
    fn zero_size_draws_degenerate_shapes() {
        for style in [IndicatorStyle::Horizontal, IndicatorStyle::Vertical, IndicatorStyle::Rect] {
            let commands = render(45.0, &config(style), Size::ZERO);
            assert!(!commands.is_empty());
            for line in lines(&commands) {
                assert_point(line.0.p0, (0.0, 0.0));
                assert_point(line.0.p1, (0.0, 0.0));
            }
        }
    }

    #[test]
    fn angles_wrap_through_trigonometry() {
        let config = config(IndicatorStyle::Horizontal);
        let size = Size::new(100.0, 100.0);
        let a = lines(&render(30.0, &config, size)).last().unwrap().0;
        let b = lines(&render(390.0, &config, size)).last().unwrap().0;
        let c = lines(&render(-330.0, &config, size)).last().unwrap().0;
        assert_point(b.p1, (a.p1.x, a.p1.y));
        assert_point(c.p1, (a.p1.x, a.p1.y));
    }
}
