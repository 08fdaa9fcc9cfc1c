use druid::widget::{Button, CrossAxisAlignment, Flex, Label, MainAxisAlignment, Slider};
use druid::{theme, AppLauncher, Color, Data, Lens, LocalizedString, Widget, WidgetExt, WidgetId, WindowDesc};

use druid_color_thesaurus::*;

use druid_rotation_indicator::{
    IndicatorConfig, IndicatorStyle, RotationController, RotationData, RotationIndicator, ROTATE, SET_ANIMATION_ENABLED,
    SET_HORIZONTAL_AXIS, SET_STYLE, SET_VERTICAL_AXIS,
};

//////////////////////////////////////////////////////////////////////////////////////
// Constants
//////////////////////////////////////////////////////////////////////////////////////
pub const BACKGROUND: Color = black::ONYX;
pub const INDICATOR_ID: WidgetId = WidgetId::reserved(1);
pub const ROTATION_STEP: f64 = 15.0;

//////////////////////////////////////////////////////////////////////////////////////
//
// AppData
//
//////////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Data, Lens, PartialEq)]
pub struct AppData {
    pub dial: f64,
}

impl RotationData for AppData {
    fn get_rotation(&self) -> f64 {
        self.dial
    }

    fn set_rotation(&mut self, rotation: f64) {
        self.dial = rotation;
    }
}

//////////////////////////////////////////////////////////////////////////////////////
//
// Main
//
//////////////////////////////////////////////////////////////////////////////////////

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => IndicatorConfig::load(&path).unwrap_or_else(|err| {
            eprintln!("ignoring indicator config: {err}");
            IndicatorConfig::default()
        }),
        None => IndicatorConfig::default(),
    };

    // The slider starts where the configured dial does.
    let data = AppData {
        dial: config.rotation.unwrap_or(0.0),
    };

    let main_window = WindowDesc::new(make_ui(&config))
        .window_size((420.0, 560.0))
        .title(LocalizedString::new("Rotation Indicator"));

    AppLauncher::with_window(main_window)
        .configure_env(|env, _| {
            env.set(theme::WINDOW_BACKGROUND_COLOR, gray::DAVYS_GRAY);
            env.set(theme::TEXT_COLOR, white::ALABASTER)
        })
        .log_to_console()
        .launch(data)
        .expect("launch failed");
}

fn make_ui(config: &IndicatorConfig) -> impl Widget<AppData> {
    let indicator = RotationIndicator::from_config(config).unwrap_or_else(|err| {
        eprintln!("ignoring indicator config: {err}");
        RotationIndicator::new()
    });

    let indicator = indicator
        .controller(RotationController::new())
        .with_id(INDICATOR_ID);

    Flex::column()
        .with_flex_child(indicator.padding(20.0), 1.0)
        .with_child(make_control_bar())
        .main_axis_alignment(MainAxisAlignment::SpaceAround)
        .cross_axis_alignment(CrossAxisAlignment::Center)
}

fn command_button<P: std::any::Any + Copy>(
    text: &str,
    selector: druid::Selector<P>,
    payload: P,
) -> impl Widget<AppData> {
    Button::new(text.to_string()).on_click(move |ctx, _data: &mut AppData, _env| {
        ctx.submit_command(selector.with(payload).to(INDICATOR_ID));
    })
}

fn make_control_bar() -> impl Widget<AppData> {
    Flex::column()
        .with_child(
            Flex::row()
                .with_child(Label::new("Rotate: "))
                .with_child(command_button("+15", ROTATE, ROTATION_STEP))
                .with_child(command_button("-15", ROTATE, -ROTATION_STEP)),
        )
        .with_child(
            Flex::row()
                .with_child(Label::new("Style: "))
                .with_child(command_button("Circle", SET_STYLE, IndicatorStyle::Horizontal))
                .with_child(command_button("Vertical", SET_STYLE, IndicatorStyle::Vertical))
                .with_child(command_button("Rect", SET_STYLE, IndicatorStyle::Rect)),
        )
        .with_child(
            Flex::row()
                .with_child(Label::new("Animation: "))
                .with_child(command_button("On", SET_ANIMATION_ENABLED, true))
                .with_child(command_button("Off", SET_ANIMATION_ENABLED, false)),
        )
        .with_child(
            Flex::row()
                .with_child(Label::new("Axis: "))
                .with_child(command_button("H on", SET_HORIZONTAL_AXIS, true))
                .with_child(command_button("H off", SET_HORIZONTAL_AXIS, false))
                .with_child(command_button("V on", SET_VERTICAL_AXIS, true))
                .with_child(command_button("V off", SET_VERTICAL_AXIS, false)),
        )
        .with_child(
            Flex::row()
                .with_child(Label::new("Angle: "))
                .with_flex_child(Slider::new().with_range(0.0, 360.0).lens(AppData::dial), 1.0)
                .with_child(Label::new(|data: &AppData, _: &_| format!("{:.0}°", data.dial)))
                .must_fill_main_axis(true),
        )
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .padding(5.0)
        .background(BACKGROUND)
}
