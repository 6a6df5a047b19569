use mcq_quiz::QuizApp;
use mcq_quiz::config::QuizConfig;
use mcq_quiz::ui::fonts::install_fonts;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Primer argumento: ruta del fichero de configuración
    let config = QuizConfig::discover(std::env::args_os().nth(1).map(PathBuf::from));
    let title = config.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 680.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            install_fonts(&cc.egui_ctx, config.marathi_font.as_deref());
            Ok(Box::new(QuizApp::new(config)))
        }),
    )
}
