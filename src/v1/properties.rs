/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Photo streams that can be listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Feature {
    Popular,
    Upcoming,
    Editors,
    FreshToday,
    FreshYesterday,
    FreshWeek,
    User,
    UserFriends,
    UserFavorites,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SortOrder {
    CreatedAt,
    Rating,
    TimesViewed,
    VotesCount,
    FavoritesCount,
    CommentsCount,
    TakenAt,
}

/// Store options to include with each photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Store {
    StoreDownload,
    StorePrint,
}

/// Photo categories as numbered by the API. The name is what search filters expect.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    TryFromPrimitive,
    IntoPrimitive,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Category {
    #[default]
    Uncategorized = 0,
    Celebrities = 1,
    Film = 2,
    Journalism = 3,
    Nude = 4,
    #[strum(to_string = "Black and White")]
    BlackAndWhite = 5,
    #[strum(to_string = "Still Life")]
    StillLife = 6,
    People = 7,
    Landscapes = 8,
    #[strum(to_string = "City and Architecture")]
    CityAndArchitecture = 9,
    Abstract = 10,
    Animals = 11,
    Macro = 12,
    Travel = 13,
    Fashion = 14,
    Commercial = 15,
    Concert = 16,
    Sport = 17,
    Nature = 18,
    #[strum(to_string = "Performing Arts")]
    PerformingArts = 19,
    Family = 20,
    Street = 21,
    Underwater = 22,
    Food = 23,
    #[strum(to_string = "Fine Art")]
    FineArt = 24,
    Wedding = 25,
    Transportation = 26,
    #[strum(to_string = "Urban Exploration")]
    UrbanExploration = 27,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum ImageSize {
    Size1 = 1,
    Size2 = 2,
    Size3 = 3,
    Size4 = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum LicenseType {
    Standard500px = 0,
    CreativeCommonsNonCommercialAttribution = 1,
    CreativeCommonsNonCommercialNoDerivatives = 2,
    CreativeCommonsNonCommercialShareAlike = 3,
    CreativeCommonsAttribution = 4,
    CreativeCommonsNoDerivatives = 5,
    CreativeCommonsShareAlike = 6,
    PublicDomainMark = 7,
    PublicDomainDedication = 8,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u32::from(*self))
    }
}

impl std::fmt::Display for LicenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn category_defaults_to_uncategorized() {
        assert_eq!(Category::default(), Category::Uncategorized);
        assert_eq!(Category::try_from(8u8).unwrap(), Category::Landscapes);
        assert_eq!(Category::BlackAndWhite.to_string(), "Black and White");
    }
}
