//! Theme preference store.

use crate::model::theme::Theme;
use crate::storage::{KeyValueStorage, THEME_STORAGE_KEY};
use crate::store::subscribers::{Subscribers, SubscriptionId};
use crate::store::StoreResult;
use log::{error, info, warn};
use std::rc::Rc;

pub struct ThemeStore {
    current: Theme,
    storage: Option<Rc<dyn KeyValueStorage>>,
    subscribers: Subscribers<Theme>,
}

impl ThemeStore {
    /// Reads the stored preference; absent or unknown values mean `Dark`.
    pub fn open(storage: Rc<dyn KeyValueStorage>) -> StoreResult<Self> {
        let current = match storage.get_item(THEME_STORAGE_KEY)? {
            Some(value) => value.parse::<Theme>().unwrap_or_else(|err| {
                warn!("event=theme_load module=store status=fallback error={err}");
                Theme::default()
            }),
            None => Theme::default(),
        };
        Ok(Self {
            current,
            storage: Some(storage),
            subscribers: Subscribers::new(),
        })
    }

    pub fn detached() -> Self {
        Self {
            current: Theme::default(),
            storage: None,
            subscribers: Subscribers::new(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Theme) + 'static) -> SubscriptionId {
        self.subscribers.add(&self.current, Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn set(&mut self, theme: Theme) -> StoreResult<()> {
        if let Some(storage) = self.storage.as_ref() {
            if let Err(err) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
                error!("event=theme_set module=store status=error error={err}");
                return Err(err.into());
            }
        }
        self.current = theme;
        self.subscribers.notify(&self.current);
        info!("event=theme_set module=store status=ok theme={theme}");
        Ok(())
    }

    /// Switches to the other theme and returns it.
    pub fn toggle(&mut self) -> StoreResult<Theme> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }
}
