//! Saved addresses, scoped per user.

use guava_core::{AddressId, UserId};

use crate::collection::upsert_where;
use crate::error::StoreError;
use crate::events::StoreEvent;
use crate::keys;
use crate::models::Address;
use crate::store::Store;

impl Store {
    /// Addresses saved by `user_id`.
    #[must_use]
    pub fn addresses(&self, user_id: &UserId) -> Vec<Address> {
        self.read_collection(&keys::addresses(user_id))
    }

    /// Insert or replace an address by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back.
    pub fn save_address(&self, user_id: &UserId, address: Address) -> Result<(), StoreError> {
        let mut addresses = self.addresses(user_id);
        let id = address.id.clone();
        upsert_where(&mut addresses, address, |existing| existing.id == id);
        self.write_collection(
            &keys::addresses(user_id),
            &addresses,
            StoreEvent::AddressesChanged,
        )
    }

    /// Delete the address with the given ID; other addresses are
    /// untouched, as are orders that copied it.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back.
    pub fn delete_address(
        &self,
        user_id: &UserId,
        address_id: &AddressId,
    ) -> Result<(), StoreError> {
        let mut addresses = self.addresses(user_id);
        addresses.retain(|address| address.id != *address_id);
        self.write_collection(
            &keys::addresses(user_id),
            &addresses,
            StoreEvent::AddressesChanged,
        )
    }

    /// Mark one address as the default, clearing the flag on the rest.
    /// An unknown ID clears every flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back.
    pub fn set_default_address(
        &self,
        user_id: &UserId,
        address_id: &AddressId,
    ) -> Result<(), StoreError> {
        let mut addresses = self.addresses(user_id);
        for address in &mut addresses {
            address.is_default = address.id == *address_id;
        }
        self.write_collection(
            &keys::addresses(user_id),
            &addresses,
            StoreEvent::AddressesChanged,
        )
    }
}
