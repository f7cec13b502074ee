//! Profile edit buffer.
//!
//! Editing works on a full copy of the profile. Saving replaces the
//! committed profile with the buffer; cancelling throws the buffer away.

use crate::data::ProfileData;
use tracing::{debug, info};

/// Start editing: the buffer is a copy of the committed profile.
pub fn begin_edit(profile: &ProfileData) -> ProfileData {
    profile.clone()
}

/// Commit the buffer. It becomes the profile wholesale.
pub fn save(buffer: ProfileData) -> ProfileData {
    buffer
}

/// Abandon the buffer and keep the original profile.
pub fn cancel(_buffer: ProfileData, original: ProfileData) -> ProfileData {
    original
}

/// Fields that can be changed from the edit form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Company,
    BirthYear,
    Location,
    Revenue,
    Experience,
    Results,
    Hobby,
    Email,
    Linkedin,
    Instagram,
    FomentValue,
}

impl ProfileField {
    pub const ALL: [ProfileField; 12] = [
        ProfileField::Name,
        ProfileField::Company,
        ProfileField::BirthYear,
        ProfileField::Location,
        ProfileField::Revenue,
        ProfileField::Experience,
        ProfileField::Results,
        ProfileField::Hobby,
        ProfileField::Email,
        ProfileField::Linkedin,
        ProfileField::Instagram,
        ProfileField::FomentValue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Full name",
            ProfileField::Company => "Company",
            ProfileField::BirthYear => "Birth year",
            ProfileField::Location => "Location",
            ProfileField::Revenue => "Revenue",
            ProfileField::Experience => "Experience",
            ProfileField::Results => "Key results",
            ProfileField::Hobby => "Hobby",
            ProfileField::Email => "Email",
            ProfileField::Linkedin => "LinkedIn",
            ProfileField::Instagram => "Instagram",
            ProfileField::FomentValue => "Foment value (R$)",
        }
    }

    /// Numeric fields accept digits only
    pub fn is_numeric(&self) -> bool {
        matches!(self, ProfileField::BirthYear | ProfileField::FomentValue)
    }

    /// Longest input a numeric field takes without overflowing its type
    pub fn max_digits(&self) -> Option<usize> {
        match self {
            ProfileField::BirthYear => Some(4),
            ProfileField::FomentValue => Some(19),
            _ => None,
        }
    }

    /// Current value of the field as text
    pub fn get(&self, profile: &ProfileData) -> String {
        match self {
            ProfileField::Name => profile.name.clone(),
            ProfileField::Company => profile.company.clone(),
            ProfileField::BirthYear => profile.birth_year.to_string(),
            ProfileField::Location => profile.location.clone(),
            ProfileField::Revenue => profile.revenue.clone(),
            ProfileField::Experience => profile.experience.clone(),
            ProfileField::Results => profile.results.clone(),
            ProfileField::Hobby => profile.hobby.clone(),
            ProfileField::Email => profile.email.clone(),
            ProfileField::Linkedin => profile.linkedin.clone(),
            ProfileField::Instagram => profile.instagram.clone(),
            ProfileField::FomentValue => profile.foment_value.to_string(),
        }
    }

    /// Write `value` into the field. Numeric fields keep only the digits
    /// of `value`; an empty number is stored as 0 and an overflowing one
    /// leaves the field unchanged.
    pub fn set(&self, profile: &mut ProfileData, value: &str) {
        match self {
            ProfileField::Name => profile.name = value.to_string(),
            ProfileField::Company => profile.company = value.to_string(),
            ProfileField::BirthYear => profile.birth_year = parse_digits(value, profile.birth_year),
            ProfileField::Location => profile.location = value.to_string(),
            ProfileField::Revenue => profile.revenue = value.to_string(),
            ProfileField::Experience => profile.experience = value.to_string(),
            ProfileField::Results => profile.results = value.to_string(),
            ProfileField::Hobby => profile.hobby = value.to_string(),
            ProfileField::Email => profile.email = value.to_string(),
            ProfileField::Linkedin => profile.linkedin = value.to_string(),
            ProfileField::Instagram => profile.instagram = value.to_string(),
            ProfileField::FomentValue => profile.foment_value = parse_digits(value, profile.foment_value),
        }
    }
}

fn parse_digits<T: std::str::FromStr + Default>(value: &str, current: T) -> T {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return T::default();
    }
    match digits.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            debug!("Ignoring out of range number {}", digits);
            current
        }
    }
}

/// Committed profile plus the optional edit buffer.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    profile: ProfileData,
    buffer: Option<ProfileData>,
}

impl ProfileEditor {
    pub fn new(profile: ProfileData) -> Self {
        Self {
            profile,
            buffer: None,
        }
    }

    pub fn profile(&self) -> &ProfileData {
        &self.profile
    }

    pub fn buffer(&self) -> Option<&ProfileData> {
        self.buffer.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.buffer.is_some()
    }

    /// Profile as it should be displayed: the buffer while editing
    pub fn displayed(&self) -> &ProfileData {
        self.buffer.as_ref().unwrap_or(&self.profile)
    }

    pub fn begin(&mut self) {
        if self.buffer.is_none() {
            debug!("Profile edit started");
            self.buffer = Some(begin_edit(&self.profile));
        }
    }

    /// Update one field of the buffer. Ignored when not editing.
    pub fn set_field(&mut self, field: ProfileField, value: &str) {
        if let Some(buffer) = self.buffer.as_mut() {
            field.set(buffer, value);
        }
    }

    pub fn save(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            self.profile = save(buffer);
            info!("Profile saved");
        }
    }

    pub fn cancel(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            self.profile = cancel(buffer, self.profile.clone());
            debug!("Profile edit cancelled");
        }
    }
}
