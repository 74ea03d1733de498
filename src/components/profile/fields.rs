use crate::models::{Barbershop, BarbershopUpdate};
use rust_i18n::t;

/// Editable profile field, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    OwnerName,
    Email,
    Phone,
    State,
    City,
    PostalCode,
    Neighborhood,
    Complement,
    ReferencePoint,
}

impl ProfileField {
    pub const ALL: [ProfileField; 10] = [
        ProfileField::Name,
        ProfileField::OwnerName,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::State,
        ProfileField::City,
        ProfileField::PostalCode,
        ProfileField::Neighborhood,
        ProfileField::Complement,
        ProfileField::ReferencePoint,
    ];

    pub fn label(self, locale: &str) -> String {
        match self {
            ProfileField::Name => t!("profile_name", locale = locale),
            ProfileField::OwnerName => t!("profile_owner_name", locale = locale),
            ProfileField::Email => t!("profile_email", locale = locale),
            ProfileField::Phone => t!("profile_phone", locale = locale),
            ProfileField::State => t!("profile_state", locale = locale),
            ProfileField::City => t!("profile_city", locale = locale),
            ProfileField::PostalCode => t!("profile_postal_code", locale = locale),
            ProfileField::Neighborhood => t!("profile_neighborhood", locale = locale),
            ProfileField::Complement => t!("profile_complement", locale = locale),
            ProfileField::ReferencePoint => t!("profile_reference_point", locale = locale),
        }
        .to_string()
    }

    /// Current value on the stored profile; missing values are empty
    pub fn get(self, shop: &Barbershop) -> String {
        let value = match self {
            ProfileField::Name => return shop.name.clone(),
            ProfileField::OwnerName => &shop.owner_name,
            ProfileField::Email => &shop.email,
            ProfileField::Phone => &shop.phone,
            ProfileField::State => &shop.state,
            ProfileField::City => &shop.city,
            ProfileField::PostalCode => &shop.postal_code,
            ProfileField::Neighborhood => &shop.neighborhood,
            ProfileField::Complement => &shop.complement,
            ProfileField::ReferencePoint => &shop.reference_point,
        };
        value.clone().unwrap_or_default()
    }

    fn slot(self, draft: &mut BarbershopUpdate) -> &mut String {
        match self {
            ProfileField::Name => &mut draft.name,
            ProfileField::OwnerName => &mut draft.owner_name,
            ProfileField::Email => &mut draft.email,
            ProfileField::Phone => &mut draft.phone,
            ProfileField::State => &mut draft.state,
            ProfileField::City => &mut draft.city,
            ProfileField::PostalCode => &mut draft.postal_code,
            ProfileField::Neighborhood => &mut draft.neighborhood,
            ProfileField::Complement => &mut draft.complement,
            ProfileField::ReferencePoint => &mut draft.reference_point,
        }
    }

    /// Value held by a draft
    pub fn value(self, draft: &BarbershopUpdate) -> &str {
        match self {
            ProfileField::Name => &draft.name,
            ProfileField::OwnerName => &draft.owner_name,
            ProfileField::Email => &draft.email,
            ProfileField::Phone => &draft.phone,
            ProfileField::State => &draft.state,
            ProfileField::City => &draft.city,
            ProfileField::PostalCode => &draft.postal_code,
            ProfileField::Neighborhood => &draft.neighborhood,
            ProfileField::Complement => &draft.complement,
            ProfileField::ReferencePoint => &draft.reference_point,
        }
    }

    pub fn set(self, draft: &mut BarbershopUpdate, value: &str) {
        *self.slot(draft) = value.to_string();
    }
}

/// Draft pre-filled from the stored profile
pub fn draft_from(shop: &Barbershop) -> BarbershopUpdate {
    let mut draft = BarbershopUpdate::default();
    for field in ProfileField::ALL {
        field.set(&mut draft, &field.get(shop));
    }
    draft
}
