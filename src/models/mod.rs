pub mod address;
pub mod appointment;
pub mod customer;
pub mod invoice;
pub mod note;
pub mod service;
pub mod session;
pub mod user;

pub use address::Address;
pub use appointment::{Appointment, AppointmentRow, AppointmentTime};
pub use customer::{Customer, CustomerRow};
pub use invoice::{Invoice, InvoiceItem, InvoiceRow};
pub use note::{Note, NoteDraft, ParentBinding, ParentKind};
pub use service::Service;
pub use session::{Session, SessionCheck, SessionRow};
pub use user::{NewUser, User};

/// Records that belong to a single user and carry their own row id.
pub trait Owned {
    fn id(&self) -> i64;
    fn owner_id(&self) -> i64;
    /// Stamp the record with the owning user, e.g. from the session.
    fn set_owner(&mut self, owner_id: i64);
    fn set_id(&mut self, id: i64);
    fn is_deleted(&self) -> bool;
}

macro_rules! impl_owned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Owned for $ty {
                fn id(&self) -> i64 {
                    self.id
                }

                fn owner_id(&self) -> i64 {
                    self.user_id
                }

                fn set_owner(&mut self, owner_id: i64) {
                    self.user_id = owner_id;
                }

                fn set_id(&mut self, id: i64) {
                    self.id = id;
                }

                fn is_deleted(&self) -> bool {
                    self.deleted
                }
            }
        )*
    };
}

impl_owned!(Customer, Appointment, Service, Invoice);
