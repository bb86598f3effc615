/*!
 * Desktop front end for holiday-dash
 *
 * Shows the salutation for a random IP address, a selector of the country codes known
 * to the holiday API, a confirmation line, and a line chart of public holidays per
 * year for the selected country.
 *
 * API failures are fatal: the app logs the error and exits with status 1.
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use holiday_dash::dashboard::{HEADING, SELECT_LABEL};
use holiday_dash::viz::util::{AxisBounds, SERIES_COLOR, axis_bounds};
use holiday_dash::{Client, Config, Dashboard, HolidaySeries, Page, Session, viz};
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::thread;

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let session = match Client::new(Config::from_env()) {
        Ok(client) => Arc::new(Session::new(client)),
        Err(err) => {
            log::error!("failed to build HTTP client: {err}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Holiday Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Holiday Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashApp::new(session)))),
    )
}

/// Main application state
struct DashApp {
    session: Arc<Session>,

    page: Option<Page>,
    selected: Option<String>,
    series: Option<HolidaySeries>,

    // Export options
    export_dir: String,

    // UI state
    is_loading: bool,
    status_message: String,
    error_message: String,

    // Background operation
    operation_receiver: Option<mpsc::Receiver<OperationResult>>,
}

#[derive(Debug)]
enum OperationResult {
    Page(Page),
    Series(HolidaySeries),
    /// An API call failed; the run cannot continue.
    Fatal(String),
}

impl DashApp {
    fn new(session: Arc<Session>) -> Self {
        // Default to user's home directory for chart export
        let export_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .to_string_lossy()
            .to_string();

        let mut app = Self {
            session,
            page: None,
            selected: None,
            series: None,
            export_dir,
            is_loading: false,
            status_message: String::new(),
            error_message: String::new(),
            operation_receiver: None,
        };
        app.start_render();
        app
    }

    fn spawn<F>(&mut self, job: F)
    where
        F: FnOnce(&Session) -> OperationResult + Send + 'static,
    {
        self.is_loading = true;
        self.error_message.clear();

        let (sender, receiver) = mpsc::channel();
        self.operation_receiver = Some(receiver);

        let session = Arc::clone(&self.session);
        thread::spawn(move || {
            let _ = sender.send(job(&session));
        });
    }

    /// Full pass: greeting, country list and the series of the default selection.
    fn start_render(&mut self) {
        self.status_message = "Loading greeting and country codes...".to_string();
        let selection = self.selected.clone();
        self.spawn(move |session| {
            match Dashboard::new(session).render(selection.as_deref(), true) {
                Ok(page) => OperationResult::Page(page),
                Err(err) => OperationResult::Fatal(format!("{err}: {}", err.source)),
            }
        });
    }

    fn start_series(&mut self, country_code: String) {
        self.status_message = format!("Loading holidays for {country_code}...");
        self.spawn(move |session| match session.holiday_series(&country_code) {
            Ok(series) => OperationResult::Series(series),
            Err(err) => OperationResult::Fatal(format!("{err}: {}", err.source)),
        });
    }

    fn check_operation_result(&mut self) {
        let result = match &self.operation_receiver {
            Some(receiver) => match receiver.try_recv() {
                Ok(result) => result,
                Err(_) => return,
            },
            None => return,
        };
        self.is_loading = false;
        self.operation_receiver = None;
        self.status_message.clear();

        match result {
            OperationResult::Page(page) => {
                self.selected = page.selected.clone();
                self.series = page.series.clone();
                self.page = Some(page);
            }
            OperationResult::Series(series) => {
                self.series = Some(series);
            }
            OperationResult::Fatal(error) => {
                log::error!("{error}");
                eprintln!("Error: {error}");
                std::process::exit(1);
            }
        }
    }

    fn export_chart(&mut self) {
        let Some(series) = &self.series else {
            return;
        };
        let path = PathBuf::from(&self.export_dir)
            .join(format!("holidays_{}.png", series.country_code.to_lowercase()));
        match viz::plot_holidays(series, &path, 1000, 600) {
            Ok(()) => {
                self.error_message.clear();
                self.status_message = format!("Chart saved to {}", path.display());
            }
            Err(err) => {
                self.error_message = format!("Failed to create chart: {err}");
            }
        }
    }
}

impl eframe::App for DashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed background operations
        self.check_operation_result();

        // Request repaint if loading (for spinner animation)
        if self.is_loading {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(HEADING);
                ui.add_space(10.0);

                let Some(page) = &self.page else {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(&self.status_message);
                    });
                    return;
                };

                ui.label(egui::RichText::new(&page.greeting).size(20.0));
                ui.small(format!("for {}", page.ip));
                ui.add_space(10.0);

                let before = self.selected.clone();
                ui.add_enabled_ui(!self.is_loading, |ui| {
                    egui::ComboBox::from_label(SELECT_LABEL)
                        .selected_text(self.selected.as_deref().unwrap_or("-"))
                        .show_ui(ui, |ui| {
                            for code in &page.country_codes {
                                ui.selectable_value(&mut self.selected, Some(code.clone()), code);
                            }
                        });
                });

                if let Some(code) = &self.selected {
                    ui.label(format!("You selected country code - {code}"));
                }

                ui.add_space(10.0);

                if let Some(series) = &self.series {
                    paint_series(ui, series);
                    ui.add_space(10.0);

                    ui.horizontal(|ui| {
                        ui.label("Export folder:");
                        ui.text_edit_singleline(&mut self.export_dir);
                        if ui.button("Browse").clicked() {
                            if let Some(path) = rfd::FileDialog::new().pick_folder() {
                                self.export_dir = path.to_string_lossy().to_string();
                            }
                        }
                    });
                }

                // Action buttons
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(!self.is_loading, egui::Button::new("New greeting"))
                        .clicked()
                    {
                        self.start_render();
                    }
                    if ui
                        .add_enabled(
                            !self.is_loading && self.series.is_some(),
                            egui::Button::new("Export chart"),
                        )
                        .clicked()
                    {
                        self.export_chart();
                    }
                    if self.is_loading {
                        ui.spinner();
                        ui.label(&self.status_message);
                    }
                });

                ui.add_space(10.0);

                if !self.is_loading && !self.status_message.is_empty() {
                    ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
                }
                if !self.error_message.is_empty() {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                }

                if self.selected != before {
                    if let Some(code) = self.selected.clone() {
                        self.series = None;
                        self.start_series(code);
                    }
                }
            });
        });
    }
}

/// Line chart of the series painted with egui primitives.
fn paint_series(ui: &mut egui::Ui, series: &HolidaySeries) {
    let Some(bounds) = axis_bounds(series) else {
        return;
    };
    let size = egui::vec2(ui.available_width(), 260.0);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let frame = response.rect;
    let plot = egui::Rect::from_min_max(
        frame.min + egui::vec2(40.0, 10.0),
        frame.max - egui::vec2(10.0, 24.0),
    );

    let axis = egui::Stroke::new(1.0, egui::Color32::GRAY);
    let text_color = ui.visuals().text_color();
    let font = egui::FontId::proportional(11.0);
    painter.rect_stroke(plot, 0.0, axis);

    let project = |year: i32, count: f64| to_screen(&bounds, plot, year, count);

    // Y ticks: 0, mid, top.
    for v in [bounds.min_count, bounds.max_count / 2.0, bounds.max_count] {
        let p = project(bounds.min_year, v);
        painter.text(
            egui::pos2(plot.left() - 6.0, p.y),
            egui::Align2::RIGHT_CENTER,
            format!("{v:.0}"),
            font.clone(),
            text_color,
        );
    }

    let points: Vec<egui::Pos2> = series
        .points()
        .map(|(y, c)| project(y, c as f64))
        .collect();
    let color = egui::Color32::from_rgb(SERIES_COLOR.0, SERIES_COLOR.1, SERIES_COLOR.2);
    painter.add(egui::Shape::line(points.clone(), egui::Stroke::new(2.0, color)));
    for (p, (year, count)) in points.iter().zip(series.points()) {
        painter.circle_filled(*p, 3.0, color);
        painter.text(
            egui::pos2(p.x, plot.bottom() + 4.0),
            egui::Align2::CENTER_TOP,
            year.to_string(),
            font.clone(),
            text_color,
        );
        if response.hovered() {
            painter.text(
                *p - egui::vec2(0.0, 6.0),
                egui::Align2::CENTER_BOTTOM,
                count.to_string(),
                font.clone(),
                text_color,
            );
        }
    }
}

fn to_screen(bounds: &AxisBounds, plot: egui::Rect, year: i32, count: f64) -> egui::Pos2 {
    let span_x = bounds.year_span().max(1) as f32;
    let span_y = (bounds.max_count - bounds.min_count).max(1.0) as f32;
    let fx = (year - bounds.min_year) as f32 / span_x;
    let fy = (count - bounds.min_count) as f32 / span_y;
    egui::pos2(
        plot.left() + fx * plot.width(),
        plot.bottom() - fy * plot.height(),
    )
}
