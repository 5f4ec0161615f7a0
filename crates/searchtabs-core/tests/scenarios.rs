//! End-to-end startup, tab, theme and reset scenarios against a real data
//! directory.

use std::cell::{Cell, RefCell};
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;
use url::Url;

use searchtabs_core::{
    Action, CloseOutcome, Color, ColorPalette, Config, ConfirmPrompt, Database, EffectiveTheme,
    KeyCombo, Relauncher, RenderSurface, ResetOutcome, ResetRequest, SessionEvent, SessionId,
    Shell, StorageContext, SurfaceFactory, TabEvent, TabState, ThemePreference, ThemeSource,
};
use searchtabs_storage::keys;
use searchtabs_theme::ThemeError;

struct FakeOs {
    current: Mutex<String>,
    changes: Receiver<String>,
}

impl ThemeSource for FakeOs {
    fn query(&self) -> searchtabs_theme::Result<String> {
        Ok(self.current.lock().clone())
    }

    fn wait_for_change(&self) -> searchtabs_theme::Result<String> {
        let name = self
            .changes
            .recv()
            .map_err(|_| ThemeError::Source("closed".to_string()))?;
        *self.current.lock() = name.clone();
        Ok(name)
    }
}

fn fake_os(initial: &str) -> (Arc<FakeOs>, Sender<String>) {
    let (tx, rx) = crossbeam_channel::unbounded();
    let os = Arc::new(FakeOs {
        current: Mutex::new(initial.to_string()),
        changes: rx,
    });
    (os, tx)
}

#[derive(Default)]
struct EngineLog {
    contexts: Vec<StorageContext>,
    navigations: Vec<(usize, String)>,
    reloads: Vec<usize>,
    backgrounds: Vec<(usize, Color)>,
}

type SharedLog = Rc<RefCell<EngineLog>>;

struct FakeSurface {
    serial: usize,
    log: SharedLog,
}

impl RenderSurface for FakeSurface {
    fn bind(&mut self, context: &StorageContext) {
        self.log.borrow_mut().contexts.push(context.clone());
    }

    fn navigate(&mut self, url: &Url) {
        self.log
            .borrow_mut()
            .navigations
            .push((self.serial, url.to_string()));
    }

    fn reload(&mut self) {
        self.log.borrow_mut().reloads.push(self.serial);
    }

    fn set_background(&mut self, color: Color) {
        self.log.borrow_mut().backgrounds.push((self.serial, color));
    }
}

struct FakeEngine {
    created: usize,
    log: SharedLog,
}

impl SurfaceFactory for FakeEngine {
    fn create_surface(&mut self) -> searchtabs_tabs::Result<Box<dyn RenderSurface>> {
        let serial = self.created;
        self.created += 1;
        Ok(Box::new(FakeSurface {
            serial,
            log: Rc::clone(&self.log),
        }))
    }
}

fn engine() -> (Box<FakeEngine>, SharedLog) {
    let log = SharedLog::default();
    let engine = Box::new(FakeEngine {
        created: 0,
        log: Rc::clone(&log),
    });
    (engine, log)
}

struct Confirm(bool);

impl ConfirmPrompt for Confirm {
    fn confirm_reset(&self) -> bool {
        self.0
    }
}

#[derive(Default)]
struct CountingRelauncher {
    calls: Cell<usize>,
}

impl Relauncher for CountingRelauncher {
    fn relaunch(&self) -> io::Result<()> {
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}

fn start(config: &Config, os_theme: &str) -> (Shell, SharedLog, Sender<String>) {
    let (engine, log) = engine();
    let (os, os_tx) = fake_os(os_theme);
    let shell = Shell::start(config.clone(), engine, os).unwrap();
    (shell, log, os_tx)
}

fn reset_flag(config: &Config) -> bool {
    Database::open(config.settings_path())
        .unwrap()
        .get_bool(keys::RESET_PROFILE, false)
        .unwrap()
}

fn populate_profile(config: &Config) {
    let profile = config.profile_path();
    std::fs::create_dir_all(profile.join("Cache")).unwrap();
    std::fs::write(profile.join("Cookies"), b"session=abc").unwrap();
    std::fs::write(profile.join("Cache").join("data_0"), vec![0u8; 4096]).unwrap();
}

fn pump_until_change(shell: &mut Shell) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if shell.pump().is_some() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    false
}

#[test]
fn test_startup_opens_one_tab_on_home() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(dir.path().join("SearchTabs"));
    let (shell, log, _os) = start(&config, "Light");

    assert_eq!(shell.tabs().len(), 1);
    assert_eq!(shell.tabs().focused(), Some(SessionId(0)));
    assert_eq!(shell.reset_outcome(), ResetOutcome::NotRequested);
    assert!(config.settings_path().exists());

    let log = log.borrow();
    assert_eq!(log.contexts.len(), 1);
    assert_eq!(log.contexts[0].path(), config.profile_path());
    assert_eq!(
        log.navigations,
        vec![(0, "https://www.perplexity.ai/".to_string())]
    );
    assert_eq!(
        log.backgrounds,
        vec![(0, ColorPalette::for_theme(EffectiveTheme::Light).background)]
    );
}

#[test]
fn test_tab_add_and_close_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path().to_path_buf());
    let (mut shell, _log, _os) = start(&config, "Dark");

    shell.dispatch(Action::NewTab).unwrap();
    assert_eq!(shell.tabs().len(), 2);
    assert_eq!(shell.tabs().focused(), Some(SessionId(1)));

    assert_eq!(shell.close_tab(SessionId(1)).unwrap(), CloseOutcome::Closed);
    assert_eq!(shell.tabs().len(), 1);
    assert_eq!(shell.tabs().focused(), Some(SessionId(0)));

    assert_eq!(shell.close_tab(SessionId(0)).unwrap(), CloseOutcome::Rejected);
    assert_eq!(shell.tabs().len(), 1);
    assert_eq!(shell.tabs().focused(), Some(SessionId(0)));
}

#[test]
fn test_shortcuts_drive_tabs_and_navigation() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path().to_path_buf());
    let (mut shell, log, _os) = start(&config, "Dark");

    assert!(shell.handle_key(&KeyCombo::parse("Ctrl+T").unwrap()));
    assert!(shell.handle_key(&KeyCombo::parse("ctrl+t").unwrap()));
    assert_eq!(shell.tabs().len(), 3);

    assert!(shell.handle_key(&KeyCombo::parse("Ctrl+Tab").unwrap()));
    assert_eq!(shell.tabs().focused(), Some(SessionId(0)));

    assert!(shell.handle_key(&KeyCombo::parse("Ctrl+R").unwrap()));
    assert_eq!(log.borrow().reloads, vec![0]);

    assert!(shell.handle_key(&KeyCombo::parse("Ctrl+W").unwrap()));
    assert!(shell.handle_key(&KeyCombo::parse("Ctrl+W").unwrap()));
    // Last tab survives a third close
    assert!(shell.handle_key(&KeyCombo::parse("Ctrl+W").unwrap()));
    assert_eq!(shell.tabs().len(), 1);

    assert!(!shell.handle_key(&KeyCombo::parse("Ctrl+Shift+Q").unwrap()));

    shell.bind_shortcut("Alt+Home", Action::GoHome).unwrap();
    log.borrow_mut().navigations.clear();
    assert!(shell.handle_key(&KeyCombo::parse("alt+home").unwrap()));
    assert_eq!(log.borrow().navigations.len(), 1);

    assert!(shell.bind_shortcut("Hyper+H", Action::GoHome).is_err());
}

#[test]
fn test_engine_events_reach_tab_state() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path().to_path_buf());
    let (mut shell, _log, _os) = start(&config, "Dark");

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    shell
        .tabs_mut()
        .subscribe(move |event| sink.borrow_mut().push(event.clone()));

    let id = SessionId(0);
    shell.handle_session_event(id, SessionEvent::NavigationStarted);
    shell.handle_session_event(id, SessionEvent::Progress { percent: 80 });
    shell.handle_session_event(
        id,
        SessionEvent::TitleChanged {
            title: "Perplexity".to_string(),
        },
    );
    shell.handle_session_event(id, SessionEvent::NavigationFinished { success: true });
    // Unknown tab
    shell.handle_session_event(SessionId(99), SessionEvent::NavigationStarted);

    let tab = shell.tabs().session(id).unwrap();
    assert_eq!(tab.state(), TabState::Loaded);
    assert_eq!(tab.title(), "Perplexity");
    assert_eq!(seen.borrow().len(), 4);
    assert_eq!(
        seen.borrow()[3],
        TabEvent::LoadFinished { id, success: true }
    );
}

#[test]
fn test_system_theme_follows_os() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path().to_path_buf());
    let (mut shell, log, os) = start(&config, "Dark");

    assert_eq!(shell.theme().preference(), ThemePreference::System);
    assert_eq!(shell.theme().effective_theme(), EffectiveTheme::Dark);

    os.send("Solarized".to_string()).unwrap();
    assert!(pump_until_change(&mut shell));
    assert_eq!(shell.theme().effective_theme(), EffectiveTheme::Dark);

    os.send("Light".to_string()).unwrap();
    assert!(pump_until_change(&mut shell));
    assert_eq!(shell.theme().effective_theme(), EffectiveTheme::Light);

    let light = ColorPalette::for_theme(EffectiveTheme::Light).background;
    assert_eq!(log.borrow().backgrounds.last(), Some(&(0, light)));
}

#[test]
fn test_explicit_then_system_preference() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path().to_path_buf());
    let (mut shell, log, _os) = start(&config, "Light");

    let change = shell.set_theme(ThemePreference::Dark);
    assert_eq!(change.effective, EffectiveTheme::Dark);

    let change = shell.set_theme_by_name("system").unwrap();
    assert_eq!(change.effective, EffectiveTheme::Light);
    assert!(shell.theme().is_listening());

    let dark = ColorPalette::for_theme(EffectiveTheme::Dark).background;
    let light = ColorPalette::for_theme(EffectiveTheme::Light).background;
    let backgrounds: Vec<Color> = log.borrow().backgrounds.iter().map(|(_, c)| *c).collect();
    assert_eq!(backgrounds, vec![light, dark, light]);

    assert!(shell.set_theme_by_name("Sepia").is_err());
    assert_eq!(shell.theme().preference(), ThemePreference::System);
}

#[test]
fn test_theme_observers_and_tabs_see_the_same_changes() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path().to_path_buf());
    let (mut shell, log, os) = start(&config, "Dark");
    shell.dispatch(Action::NewTab).unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    shell.subscribe_theme(move |change| sink.borrow_mut().push(change.effective));

    shell.set_theme(ThemePreference::Light);
    let light = ColorPalette::for_theme(EffectiveTheme::Light).background;
    for id in [0, 1] {
        assert_eq!(
            log.borrow().backgrounds.iter().rev().find(|(s, _)| *s == id),
            Some(&(id, light))
        );
    }

    shell.set_theme(ThemePreference::System);
    os.send("Light".to_string()).unwrap();
    assert!(pump_until_change(&mut shell));

    assert_eq!(
        *seen.borrow(),
        vec![EffectiveTheme::Light, EffectiveTheme::Dark, EffectiveTheme::Light]
    );
    assert_eq!(log.borrow().backgrounds.last(), Some(&(1, light)));
}

#[test]
fn test_preferences_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path().to_path_buf());

    {
        let (mut shell, _log, _os) = start(&config, "Dark");
        assert!(shell.confirm_close_tabs());
        shell.set_theme(ThemePreference::Light);
        shell.set_confirm_close_tabs(false).unwrap();
    }

    let (shell, log, _os) = start(&config, "Dark");
    assert_eq!(shell.theme().preference(), ThemePreference::Light);
    assert!(!shell.confirm_close_tabs());
    assert_eq!(
        log.borrow().backgrounds,
        vec![(0, ColorPalette::for_theme(EffectiveTheme::Light).background)]
    );
}

#[test]
fn test_reset_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path().to_path_buf());
    let relauncher = CountingRelauncher::default();

    {
        let (shell, _log, _os) = start(&config, "Dark");
        populate_profile(&config);

        assert_eq!(
            shell.request_reset(&Confirm(false), &relauncher),
            ResetRequest::Cancelled
        );
        assert_eq!(relauncher.calls.get(), 0);
        assert!(!reset_flag(&config));

        assert_eq!(
            shell.request_reset(&Confirm(true), &relauncher),
            ResetRequest::Scheduled
        );
        assert_eq!(relauncher.calls.get(), 1);
        assert!(reset_flag(&config));
    }

    let (shell, log, _os) = start(&config, "Dark");
    assert_eq!(shell.reset_outcome(), ResetOutcome::Applied);
    assert!(!config.profile_path().exists());
    assert!(!reset_flag(&config));
    assert!(config.settings_path().exists());
    assert_eq!(shell.tabs().len(), 1);
    assert_eq!(log.borrow().contexts[0].path(), config.profile_path());

    // Nothing pending on the following start
    drop(shell);
    populate_profile(&config);
    let (shell, _log, _os) = start(&config, "Dark");
    assert_eq!(shell.reset_outcome(), ResetOutcome::NotRequested);
    assert!(config.profile_path().exists());
}

#[test]
fn test_reset_with_deletion_failure_still_starts() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path().to_path_buf());

    {
        let (shell, _log, _os) = start(&config, "Dark");
        populate_profile(&config);
        shell.request_reset(&Confirm(true), &CountingRelauncher::default());
    }

    let (engine, _log) = engine();
    let (os, _os_tx) = fake_os("Dark");
    let shell = Shell::start_with_remover(config.clone(), engine, os, |_: &Path| {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "file in use"))
    })
    .unwrap();

    assert_eq!(shell.reset_outcome(), ResetOutcome::DeletionFailed);
    assert!(!reset_flag(&config));
    assert!(config.profile_path().exists());
    assert_eq!(shell.tabs().len(), 1);
    assert_eq!(shell.tabs().focused(), Some(SessionId(0)));
}
