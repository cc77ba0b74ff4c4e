pub mod direction;
pub mod domain;
pub mod notification;

pub use direction::{Band, CYCLE_LEN, compute_entry};
pub use domain::{DirectionEntry, Distance, Icon};
pub use notification::{NavigationNotification, NotificationChannel, NotificationIdentity};
