use crate::config::AppConfig;
use crate::services::ledger::Ledger;
use crate::services::messaging::NotificationProvider;

pub struct AppState {
    pub config: AppConfig,
    pub ledger: Ledger,
    pub notifier: Box<dyn NotificationProvider>,
}
