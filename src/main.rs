use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::mpsc;

use mark_pad::app::file_filters::is_markdown_path;
use mark_pad::app::markdown;
use mark_pad::app::{
    AppEvent, NativeFiles, NotifyBackend, NullBackend, RecentFiles, SessionManager, UiSettings,
    ViewMode, WatchBackend, WatchRegistry,
};

#[derive(Clone, Debug, PartialEq)]
struct LaunchOptions {
    view_mode: Option<ViewMode>,
    watch: bool,
    paths: Vec<PathBuf>,
}

fn parse_launch_options<I, S>(args: I) -> LaunchOptions
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut view_mode = None;
    let mut watch = false;
    let mut paths = Vec::new();

    for arg in args {
        let arg = arg.into();
        if arg == "-e" {
            view_mode = Some(ViewMode::Edit);
            continue;
        }
        if arg == "-p" {
            view_mode = Some(ViewMode::Preview);
            continue;
        }
        if arg == "-s" {
            view_mode = Some(ViewMode::Split);
            continue;
        }
        if arg == "--watch" {
            watch = true;
            continue;
        }
        paths.push(PathBuf::from(arg));
    }

    LaunchOptions {
        view_mode,
        watch,
        paths,
    }
}

fn main() {
    env_logger::init();

    let options = parse_launch_options(std::env::args_os().skip(1));

    let mut settings = UiSettings::load();
    if let Some(mode) = options.view_mode {
        settings.view_mode = mode;
    }

    let (events_tx, events_rx) = mpsc::channel();
    let backend: Box<dyn WatchBackend> = match NotifyBackend::new(events_tx) {
        Ok(backend) => Box::new(backend),
        Err(err) => {
            log::error!("file watcher unavailable: {}", err);
            Box::new(NullBackend)
        }
    };

    let mut session = SessionManager::new(
        NativeFiles,
        WatchRegistry::new(backend),
        RecentFiles::load(),
    );
    session.set_view_mode(settings.view_mode);

    // Startup files from the OS or command line, filtered by the same rules
    // as interactive open.
    for path in &options.paths {
        if !is_markdown_path(path) {
            log::warn!("skipping non-markdown file: {}", path.display());
            continue;
        }
        match session.open_by_path(path) {
            Ok(_) => log::info!("opened {}", path.display()),
            Err(err) => eprintln!("{}", err),
        }
    }
    if session.count() == 0 {
        session.new_untitled();
    }

    if let Some(doc) = session.active_doc() {
        print!("{}", markdown::render_preview(&doc.content));
    }

    if options.watch {
        log::info!("watching {} file(s)", session.watches().count());
        while let Ok(event) = events_rx.recv() {
            match event {
                AppEvent::FileChanged(path) => {
                    session.handle_external_change(&path);
                    if let Some(doc) = session.active_doc() {
                        print!("{}", markdown::render_preview(&doc.content));
                    }
                }
            }
        }
    }

    session.unwatch_all();
    settings.view_mode = session.view_mode();
    if let Err(err) = settings.save() {
        log::warn!("failed to save settings: {}", err);
    }
}
