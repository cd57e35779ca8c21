//! The restaurant catalog and its open-now query.

use oh_core::{MinuteOfDay, Weekday};

use crate::{Restaurant, RestaurantRecord};

/// All known restaurants, in load order.  Read-only once built.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    /// Build one [`Restaurant`] per record, preserving record order.
    pub fn from_records(records: impl IntoIterator<Item = RestaurantRecord>) -> Self {
        Self::new(records.into_iter().map(Restaurant::from).collect())
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Restaurant> {
        self.restaurants.iter()
    }

    /// Restaurants open on `day` at `time`, in catalog order.
    pub fn find_open(&self, day: Weekday, time: MinuteOfDay) -> Vec<&Restaurant> {
        self.restaurants
            .iter()
            .filter(|r| r.is_open(day, time))
            .collect()
    }

    /// Names of the restaurants [`find_open`](Self::find_open) returns.
    pub fn open_names(&self, day: Weekday, time: MinuteOfDay) -> Vec<&str> {
        self.find_open(day, time)
            .into_iter()
            .map(Restaurant::name)
            .collect()
    }

    /// Parallel [`find_open`](Self::find_open).  Same result, same order.
    #[cfg(feature = "parallel")]
    pub fn par_find_open(&self, day: Weekday, time: MinuteOfDay) -> Vec<&Restaurant> {
        use rayon::prelude::*;

        self.restaurants
            .par_iter()
            .filter(|r| r.is_open(day, time))
            .collect()
    }
}

impl FromIterator<Restaurant> for Catalog {
    fn from_iter<I: IntoIterator<Item = Restaurant>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Restaurant;
    type IntoIter = std::slice::Iter<'a, Restaurant>;

    fn into_iter(self) -> Self::IntoIter {
        self.restaurants.iter()
    }
}
