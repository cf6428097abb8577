// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together localization, page content and the
//! contact form, and translates messages into side effects like content
//! fetches or email sends.

pub mod contact;
pub mod content;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{KeyValueStorage, LanguagePreference};
use crate::application::ContentLoader;
use crate::config::{self, Config, WORK_SECTION_PROJECT_LIMIT};
use crate::i18n::LocaleResolver;
use crate::infrastructure::{EmailJsSender, FileStorage, MemoryStorage, MicroCmsClient, SystemLanguage};
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use contact::ContactState;
use content::PageContent;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    locale: LocaleResolver,
    config: Config,
    theme_mode: ThemeMode,
    content: PageContent,
    contact: ContactState,
    /// `None` when the content client could not be built.
    loader: Option<Arc<ContentLoader<MicroCmsClient>>>,
    /// `None` when the email client could not be built.
    mailer: Option<Arc<EmailJsSender>>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.locale.language())
            .field("theme_mode", &self.theme_mode)
            .field("has_loader", &self.loader.is_some())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the application.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Boots from the environment: directories, settings, storage and the
    /// OS locale.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (mut config, config_warning) = config::load();
        config.apply_env_overrides();

        let storage: Box<dyn KeyValueStorage> = match FileStorage::open_default(None) {
            Some(storage) => Box::new(storage),
            None => {
                tracing::warn!("no data directory available, language choice will not persist");
                Box::new(MemoryStorage::new())
            }
        };

        let (mut app, task) = Self::assemble(config, storage, &SystemLanguage, &flags);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, task)
    }

    /// Builds the application from already-resolved parts and starts the
    /// initial content load.
    fn assemble(
        config: Config,
        storage: Box<dyn KeyValueStorage>,
        preference: &dyn LanguagePreference,
        flags: &Flags,
    ) -> (Self, Task<Message>) {
        let locale = LocaleResolver::init(storage, preference, flags.lang.as_deref());

        let loader = if flags.offline {
            tracing::info!("offline mode, rendering fallback content");
            None
        } else {
            match MicroCmsClient::from_config(&config.content) {
                Ok(client) => Some(Arc::new(ContentLoader::new(client))),
                Err(err) => {
                    tracing::warn!(error = %err, "content client unavailable");
                    None
                }
            }
        };

        let mailer = match EmailJsSender::new() {
            Ok(sender) => Some(Arc::new(sender)),
            Err(err) => {
                tracing::warn!(error = %err, "email client unavailable");
                None
            }
        };

        let mut app = App {
            locale,
            theme_mode: config.general.theme_mode,
            config,
            content: PageContent::new(),
            contact: ContactState::new(),
            loader,
            mailer,
            notifications: notifications::Manager::new(),
        };

        let task = app.load_content();
        (app, task)
    }

    /// Starts a new content load generation. Without a loader the page keeps
    /// its fallback data.
    fn load_content(&mut self) -> Task<Message> {
        let Some(loader) = self.loader.clone() else {
            return Task::none();
        };

        let generation = self.content.begin_load();

        let projects_loader = Arc::clone(&loader);
        let projects = Task::perform(
            async move {
                projects_loader
                    .fetch_projects(Some(WORK_SECTION_PROJECT_LIMIT))
                    .await
            },
            move |projects| Message::ProjectsLoaded {
                generation,
                projects,
            },
        );

        let about = Task::perform(
            async move { loader.fetch_about().await },
            move |(profile, education)| Message::AboutLoaded {
                generation,
                profile,
                education,
            },
        );

        Task::batch([projects, about])
    }

    fn title(&self) -> String {
        self.locale.translations().app.window_title.clone()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            locale: &mut self.locale,
            config: &self.config,
            content: &mut self.content,
            contact: &mut self.contact,
            mailer: self.mailer.as_ref(),
            notifications: &mut self.notifications,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            t: self.locale.translations(),
            language: self.locale.language(),
            content: &self.content,
            contact: &self.contact,
            notifications: &self.notifications,
        })
    }
}
