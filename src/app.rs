//! Main application state and eframe integration.

use std::path::PathBuf;

use egui::{CentralPanel, Context, Key, TopBottomPanel, Ui};
use xsetwacom_core::config::{
    self, MAX_SCALE, MIN_SCALE, MONITOR_MAPPER_UNITS, PRESSURE_EDITOR_UNITS, TABLET_MAPPER_UNITS,
};
use xsetwacom_core::{
    available_fonts, available_languages, session, ApplicationSettings, Area, Device, DeviceService,
    DeviceSettings, ErrorKind, Localisation, Message, Monitor, NoticeLevel, Pressure, References,
    RegionMapping, Side, Startup, Theme,
};

use crate::area_mapper::area_mapper;
use crate::canvas;
use crate::pressure::pressure_editor;
use crate::theme::{self, UiScale};
use crate::toast::Toasts;

/// Everything resolved before the window opens.
pub struct Session {
    pub devices: Vec<Device>,
    pub monitors: Vec<Monitor>,
    pub startup: Startup,
    pub service: Box<dyn DeviceService>,
    pub settings_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Tablet,
    Monitor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    Appearance,
    Display,
    Language,
}

/// Main application state.
pub struct TabletApp {
    /// Stylus devices found at startup
    devices: Vec<Device>,
    /// Monitors found at startup
    monitors: Vec<Monitor>,
    device_index: Option<usize>,
    monitor_index: Option<usize>,

    /// Settings being edited, written on Save & Apply
    settings: DeviceSettings,
    settings_path: PathBuf,
    /// Anchor state of both mappers
    mapping: RegionMapping,
    service: Box<dyn DeviceService>,

    app_settings: ApplicationSettings,
    app_settings_path: PathBuf,
    languages_dir: PathBuf,
    /// Language codes offered in the settings window
    languages: Vec<String>,
    fonts_dir: PathBuf,
    /// Font files offered in the settings window
    fonts: Vec<String>,
    strings: Localisation,
    scale: UiScale,
    /// Re-apply theme and text sizes on the next frame
    style_pending: bool,
    /// Reload the selected font on the next frame
    font_pending: bool,

    toasts: Toasts,
    tab: Tab,
    settings_tab: SettingsTab,
    show_settings_window: bool,
}

impl TabletApp {
    /// Create the application from a resolved session.
    pub fn new(cc: &eframe::CreationContext<'_>, session: Session) -> Self {
        let app_settings_path = config::application_settings_path();
        let app_settings = ApplicationSettings::load_or_default(&app_settings_path);
        let languages_dir = config::languages_dir();
        let fonts_dir = config::fonts_dir();
        let strings =
            Localisation::load_or_english(&languages_dir, &app_settings.language.language);

        let Session {
            devices,
            monitors,
            startup,
            service,
            settings_path,
        } = session;

        let mut toasts = Toasts::default();
        let now = cc.egui_ctx.input(|i| i.time);
        for notice in &startup.notices {
            toasts.push_notice(notice, &strings, now);
        }

        Self {
            devices,
            monitors,
            device_index: startup.device_index,
            monitor_index: startup.monitor_index,
            settings: startup.settings,
            settings_path,
            mapping: RegionMapping::new(),
            service,
            scale: UiScale::new(app_settings.display.scale),
            languages: available_languages(&languages_dir),
            app_settings,
            app_settings_path,
            languages_dir,
            fonts: available_fonts(&fonts_dir),
            fonts_dir,
            strings,
            style_pending: true,
            font_pending: true,
            toasts,
            tab: Tab::Tablet,
            settings_tab: SettingsTab::Appearance,
            show_settings_window: false,
        }
    }

    fn selected_device(&self) -> Option<&Device> {
        self.device_index.and_then(|i| self.devices.get(i))
    }

    fn selected_monitor(&self) -> Option<&Monitor> {
        self.monitor_index.and_then(|i| self.monitors.get(i))
    }

    fn references(&self) -> References {
        References::new(self.selected_device(), self.selected_monitor())
    }

    fn now(ctx: &Context) -> f64 {
        ctx.input(|i| i.time)
    }

    /// Write the settings file, then push the settings to the device.
    fn save_and_apply(&mut self, ctx: &Context) {
        let Some(device) = self.selected_device() else {
            return;
        };

        let result = session::save_and_apply(
            &self.settings_path,
            &self.settings,
            self.service.as_ref(),
            device.id,
            self.selected_monitor(),
        );

        let now = Self::now(ctx);
        match result {
            Ok(()) => {
                let text = self.strings.get(Message::ToastDeviceSettingsSaved);
                self.toasts.push(NoticeLevel::Success, text, now);
            }
            Err(e) => {
                let message = match e.kind() {
                    ErrorKind::SettingsIo | ErrorKind::SettingsParse => {
                        Message::ToastDeviceSettingsSaveFailed
                    }
                    _ => Message::ToastDeviceApplyFailed,
                };
                let text = format!("{}\n{}", self.strings.get(message), e);
                self.toasts.push(NoticeLevel::Error, text, now);
            }
        }
    }

    fn save_application_settings(&mut self, ctx: &Context) {
        let now = Self::now(ctx);
        match self.app_settings.save(&self.app_settings_path) {
            Ok(()) => {
                let text = self.strings.get(Message::ToastApplicationSettingsSaved);
                self.toasts.push(NoticeLevel::Success, text, now);
            }
            Err(e) => self.toasts.push(NoticeLevel::Error, e.to_string(), now),
        }
    }

    /// Install the selected font, falling back to the built-in one.
    fn apply_font(&mut self, ctx: &Context) {
        let font = &self.app_settings.appearance.font;
        match theme::font_definitions(&self.fonts_dir, font) {
            Ok(fonts) => ctx.set_fonts(fonts),
            Err(e) => {
                let text = format!("{}\n{:#}", self.strings.get(Message::ToastFontLoadFailed), e);
                self.toasts.push(NoticeLevel::Warning, text, Self::now(ctx));
                self.app_settings.appearance.font.clear();
                ctx.set_fonts(egui::FontDefinitions::default());
            }
        }
    }

    /// Render the menu bar.
    fn render_menu(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button(self.strings.get(Message::MenuBarSettings), |ui| {
                    if ui
                        .button(self.strings.get(Message::MenuBarSettingsApplication))
                        .clicked()
                    {
                        self.show_settings_window = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Render the bottom bar holding Save & Apply.
    fn render_actions(&mut self, ctx: &Context) {
        let has_device = self.selected_device().is_some();
        let mut clicked = false;

        TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(self.scale.px(4.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                clicked = ui
                    .add_enabled(
                        has_device,
                        egui::Button::new(self.strings.get(Message::SaveApply)),
                    )
                    .on_hover_text("Ctrl+S")
                    .clicked();
            });
            ui.add_space(self.scale.px(4.0));
        });

        if clicked {
            self.save_and_apply(ctx);
        }
    }

    /// Render both mappers, the connectors between them and the tabs.
    fn render_central(&mut self, ctx: &Context) {
        let references = self.references();
        self.mapping.sync(&self.settings, &references);

        CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_mappers(ui);
                ui.add_space(self.scale.px(8.0));
                ui.separator();
                self.render_tabs(ui);
            });
        });

        self.mapping.commit(&mut self.settings, &references);
    }

    fn render_mappers(&mut self, ui: &mut Ui) {
        let fill = theme::frame_fill(self.app_settings.appearance.theme);
        let scale = self.scale;
        let has_device = self.selected_device().is_some();
        let has_monitor = self.selected_monitor().is_some();

        let (monitor, tablet) = ui
            .vertical_centered(|ui| {
                ui.add_space(scale.px(8.0));
                let monitor = ui
                    .add_enabled_ui(has_monitor, |ui| {
                        area_mapper(
                            ui,
                            "monitor_mapper",
                            self.mapping.anchors_mut(Side::Monitor),
                            scale.size(MONITOR_MAPPER_UNITS),
                            self.settings.constraints(Side::Monitor),
                            fill,
                            scale,
                        )
                    })
                    .inner;
                ui.add_space(scale.px(48.0));
                let tablet = ui
                    .add_enabled_ui(has_device, |ui| {
                        area_mapper(
                            ui,
                            "tablet_mapper",
                            self.mapping.anchors_mut(Side::Tablet),
                            scale.size(TABLET_MAPPER_UNITS),
                            self.settings.constraints(Side::Tablet),
                            fill,
                            scale,
                        )
                    })
                    .inner;
                (monitor, tablet)
            })
            .inner;

        if monitor.changed {
            self.mapping.mark_dragged(Side::Monitor);
        }
        if tablet.changed {
            self.mapping.mark_dragged(Side::Tablet);
        }

        canvas::render_connectors(
            ui.painter(),
            monitor.frame.map(|f| (f, self.mapping.anchors(Side::Monitor))),
            tablet.frame.map(|f| (f, self.mapping.anchors(Side::Tablet))),
        );
    }

    fn render_tabs(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(
                &mut self.tab,
                Tab::Tablet,
                self.strings.get(Message::TabsTabletTitle),
            );
            ui.selectable_value(
                &mut self.tab,
                Tab::Monitor,
                self.strings.get(Message::TabsMonitorTitle),
            );
        });
        ui.separator();

        match self.tab {
            Tab::Tablet => self.render_tablet_tab(ui),
            Tab::Monitor => self.render_monitor_tab(ui),
        }
    }

    fn render_tablet_tab(&mut self, ui: &mut Ui) {
        let has_device = self.selected_device().is_some();
        let mut selected = self.device_index;

        ui.add_enabled_ui(has_device, |ui| {
            let current = self
                .selected_device()
                .map(|d| d.name.clone())
                .unwrap_or_default();
            egui::ComboBox::from_label(self.strings.get(Message::TabsTabletDevice))
                .selected_text(current)
                .width(self.scale.px(280.0))
                .show_ui(ui, |ui| {
                    for (i, device) in self.devices.iter().enumerate() {
                        ui.selectable_value(&mut selected, Some(i), device.name.as_str());
                    }
                });
        });

        if selected != self.device_index {
            if let Some(device) = selected.and_then(|i| self.devices.get(i)) {
                self.mapping.select_device(&mut self.settings, device);
                self.device_index = selected;
            }
        }

        ui.add_space(self.scale.px(4.0));
        ui.add_enabled_ui(has_device, |ui| {
            self.render_area_controls(ui, Side::Tablet);
        });

        ui.add_space(self.scale.px(8.0));
        ui.label(self.strings.get(Message::TabsTabletPressureCurve));

        let fill = theme::frame_fill(self.app_settings.appearance.theme);
        let size = self.scale.px(PRESSURE_EDITOR_UNITS);
        let scale = self.scale;
        ui.add_enabled_ui(has_device, |ui| {
            if has_device {
                let mut pressure = self.settings.device_pressure.clamped();
                if pressure_editor(ui, "pressure_editor", &mut pressure, size, fill, scale) {
                    self.settings.device_pressure = pressure;
                }
            } else {
                let mut linear = Pressure::LINEAR;
                pressure_editor(ui, "pressure_editor", &mut linear, size, fill, scale);
            }
        });
    }

    fn render_monitor_tab(&mut self, ui: &mut Ui) {
        let has_monitor = self.selected_monitor().is_some();
        let mut selected = self.monitor_index;

        ui.add_enabled_ui(has_monitor, |ui| {
            let current = self
                .selected_monitor()
                .map(monitor_label)
                .unwrap_or_default();
            egui::ComboBox::from_label(self.strings.get(Message::TabsMonitorMonitor))
                .selected_text(current)
                .width(self.scale.px(280.0))
                .show_ui(ui, |ui| {
                    for (i, monitor) in self.monitors.iter().enumerate() {
                        ui.selectable_value(&mut selected, Some(i), monitor_label(monitor));
                    }
                });
        });

        if selected != self.monitor_index {
            if let Some(monitor) = selected.and_then(|i| self.monitors.get(i)) {
                self.mapping.select_monitor(&mut self.settings, monitor);
                self.monitor_index = selected;
            }
        }

        ui.add_space(self.scale.px(4.0));
        ui.add_enabled_ui(has_monitor, |ui| {
            self.render_area_controls(ui, Side::Monitor);
        });
    }

    /// Numeric area fields and policy flags for one side.
    fn render_area_controls(&mut self, ui: &mut Ui, side: Side) {
        let reference = self.references().get(side).copied().unwrap_or(Area::ZERO);
        let strings = &self.strings;
        let labels = AreaLabels::of(side);
        let mut edited = false;

        let (full_area, aspect_ratio) = match side {
            Side::Monitor => (
                &mut self.settings.monitor_force_full_area,
                &mut self.settings.monitor_force_aspect_ratio,
            ),
            Side::Tablet => (
                &mut self.settings.device_force_full_area,
                &mut self.settings.device_force_aspect_ratio,
            ),
        };
        let locked = *full_area;

        ui.horizontal(|ui| {
            edited |= ui
                .checkbox(full_area, strings.get(labels.full_area))
                .changed();
            // Stored only; proportional dragging is not implemented.
            ui.add_enabled(
                false,
                egui::Checkbox::new(aspect_ratio, strings.get(labels.force_proportions)),
            );
        });

        let area = self.settings.area_mut(side);
        ui.add_enabled_ui(!locked, |ui| {
            egui::Grid::new(("area_grid", side as u8))
                .num_columns(4)
                .spacing([self.scale.px(12.0), self.scale.px(4.0)])
                .show(ui, |ui| {
                    ui.label(strings.get(labels.width));
                    edited |= area_field(ui, &mut area.width, reference.width);
                    ui.label(strings.get(labels.offset_x));
                    edited |= area_field(ui, &mut area.offset_x, reference.width);
                    ui.end_row();

                    ui.label(strings.get(labels.height));
                    edited |= area_field(ui, &mut area.height, reference.height);
                    ui.label(strings.get(labels.offset_y));
                    edited |= area_field(ui, &mut area.offset_y, reference.height);
                    ui.end_row();
                });
        });

        if edited {
            self.mapping.mark_edited(side);
        }
    }

    /// Show the application settings window.
    fn render_settings_window(&mut self, ctx: &Context) {
        if !self.show_settings_window {
            return;
        }

        let mut open = true;
        let mut save = false;
        egui::Window::new(self.strings.get(Message::PopupSettingsTitle))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for (tab, message) in [
                        (SettingsTab::Appearance, Message::PopupSettingsTabsAppearanceTitle),
                        (SettingsTab::Display, Message::PopupSettingsTabsDisplayTitle),
                        (SettingsTab::Language, Message::PopupSettingsTabsLanguageTitle),
                    ] {
                        ui.selectable_value(&mut self.settings_tab, tab, self.strings.get(message));
                    }
                });
                ui.separator();

                match self.settings_tab {
                    SettingsTab::Appearance => self.render_appearance_settings(ui),
                    SettingsTab::Display => self.render_display_settings(ui),
                    SettingsTab::Language => self.render_language_settings(ui),
                }

                ui.separator();
                save = ui.button(self.strings.get(Message::Save)).clicked();
            });

        self.show_settings_window = open;
        if save {
            self.save_application_settings(ctx);
        }
    }

    fn render_appearance_settings(&mut self, ui: &mut Ui) {
        let theme = &mut self.app_settings.appearance.theme;
        let before = *theme;
        ui.horizontal(|ui| {
            ui.label(self.strings.get(Message::PopupSettingsTabsAppearanceTheme));
            ui.radio_value(
                theme,
                Theme::Dark,
                self.strings.get(Message::PopupSettingsTabsAppearanceThemeDark),
            );
            ui.radio_value(
                theme,
                Theme::Light,
                self.strings.get(Message::PopupSettingsTabsAppearanceThemeLight),
            );
        });
        if *theme != before {
            self.style_pending = true;
        }

        let default_name = self.strings.get(Message::PopupSettingsTabsAppearanceFontDefault);
        let mut font = self.app_settings.appearance.font.clone();
        let shown = if font.is_empty() {
            default_name.to_string()
        } else {
            font.clone()
        };
        egui::ComboBox::from_label(self.strings.get(Message::PopupSettingsTabsAppearanceFont))
            .selected_text(shown)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut font, String::new(), default_name);
                for name in &self.fonts {
                    ui.selectable_value(&mut font, name.clone(), name.as_str());
                }
            });

        if font != self.app_settings.appearance.font {
            self.app_settings.appearance.font = font;
            self.font_pending = true;
        }
    }

    fn render_display_settings(&mut self, ui: &mut Ui) {
        let scale = &mut self.app_settings.display.scale;
        let response = ui.add(
            egui::Slider::new(scale, MIN_SCALE..=MAX_SCALE)
                .step_by(0.05)
                .text(self.strings.get(Message::PopupSettingsTabsDisplayScale)),
        );
        // Resizing while the slider is held makes it jump under the pointer.
        if response.drag_stopped() || (response.changed() && !response.dragged()) {
            self.scale = UiScale::new(*scale);
            self.style_pending = true;
        }
    }

    fn render_language_settings(&mut self, ui: &mut Ui) {
        let mut language = self.app_settings.language.language.clone();
        egui::ComboBox::from_label(self.strings.get(Message::PopupSettingsTabsLanguageLanguage))
            .selected_text(language.as_str())
            .show_ui(ui, |ui| {
                for code in &self.languages {
                    ui.selectable_value(&mut language, code.clone(), code.as_str());
                }
            });

        if language != self.app_settings.language.language {
            self.strings = Localisation::load_or_english(&self.languages_dir, &language);
            self.app_settings.language.language = language;
        }
    }

    /// Handle keyboard shortcuts.
    fn handle_keyboard(&mut self, ctx: &Context) {
        let (save, quit) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(Key::S),
                i.modifiers.ctrl && i.key_pressed(Key::Q),
            )
        });

        if save {
            self.save_and_apply(ctx);
        }
        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// Localised labels of one tab's area controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AreaLabels {
    width: Message,
    height: Message,
    offset_x: Message,
    offset_y: Message,
    full_area: Message,
    force_proportions: Message,
}

impl AreaLabels {
    fn of(side: Side) -> Self {
        match side {
            Side::Tablet => Self {
                width: Message::TabsTabletWidth,
                height: Message::TabsTabletHeight,
                offset_x: Message::TabsTabletOffsetX,
                offset_y: Message::TabsTabletOffsetY,
                full_area: Message::TabsTabletFullArea,
                force_proportions: Message::TabsTabletForceProportions,
            },
            Side::Monitor => Self {
                width: Message::TabsMonitorWidth,
                height: Message::TabsMonitorHeight,
                offset_x: Message::TabsMonitorOffsetX,
                offset_y: Message::TabsMonitorOffsetY,
                full_area: Message::TabsMonitorFullArea,
                force_proportions: Message::TabsMonitorForceProportions,
            },
        }
    }
}

/// Drag field for one area value, limited to `[0, max]`. Returns true if
/// edited.
fn area_field(ui: &mut Ui, value: &mut f32, max: f32) -> bool {
    ui.add(
        egui::DragValue::new(value)
            .range(0.0..=max.max(0.0))
            .speed(1.0)
            .max_decimals(0),
    )
    .changed()
}

fn monitor_label(monitor: &Monitor) -> String {
    format!("{} ({:.0}x{:.0})", monitor.name, monitor.width, monitor.height)
}

impl eframe::App for TabletApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.style_pending {
            theme::apply(ctx, self.app_settings.appearance.theme, self.scale);
            self.style_pending = false;
        }
        if self.font_pending {
            self.apply_font(ctx);
            self.font_pending = false;
        }

        self.handle_keyboard(ctx);
        self.render_menu(ctx);
        self.render_actions(ctx);
        self.render_central(ctx);
        self.render_settings_window(ctx);
        self.toasts.show(ctx, &self.strings, self.scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_label() {
        let monitor = Monitor {
            id: 0,
            primary: true,
            offset_x: 0.0,
            offset_y: 0.0,
            width: 2560.0,
            height: 1440.0,
            name: "DP-1".to_string(),
        };
        assert_eq!(monitor_label(&monitor), "DP-1 (2560x1440)");
    }

    #[test]
    fn test_area_labels_follow_tab() {
        let tablet = AreaLabels::of(Side::Tablet);
        let monitor = AreaLabels::of(Side::Monitor);
        assert_eq!(tablet.width.key(), "tabsTabletWidth");
        assert_eq!(tablet.force_proportions.key(), "tabsTabletForceProportions");
        assert_eq!(monitor.offset_y.key(), "tabsMonitorOffsetY");
        assert_eq!(monitor.full_area.key(), "tabsMonitorFullArea");
    }
}
