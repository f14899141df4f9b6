mod device;
mod event;
mod menu;
mod order;

pub use device::{Device, DeviceStatus};
pub use event::{AgeBracket, Event, Gender, MenuItemKind};
pub use menu::{MenuItem, MenuItemInput};
pub use order::{Order, OrderChannel, OrderLine, OrderStatus, PaymentMethod};
