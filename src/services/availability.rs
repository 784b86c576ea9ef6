use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::interceptors::AppResult;
use crate::repositories::{BookingRepository, PropertyBlockRepository};

/// Computes which dates of a property are unbookable over a period, merging
/// administrative blocks with the spans of active bookings.
#[derive(Clone)]
pub struct AvailabilityService {
    bookings: Arc<dyn BookingRepository>,
    blocks: Arc<dyn PropertyBlockRepository>,
}

impl AvailabilityService {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        blocks: Arc<dyn PropertyBlockRepository>,
    ) -> Self {
        Self { bookings, blocks }
    }

    /// Every date within [start_date, end_date] rendered unbookable by either
    /// a block or a non-canceled booking. `exclude_booking` leaves one booking
    /// out of the scan, so a booking being updated does not conflict with its
    /// own current reservation.
    pub async fn unavailable_dates(
        &self,
        property_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        exclude_booking: Option<Uuid>,
    ) -> AppResult<BTreeSet<NaiveDate>> {
        let mut dates = BTreeSet::new();

        let blocks = self
            .blocks
            .find_by_property_and_range(property_id, start_date, end_date)
            .await?;
        dates.extend(blocks.into_iter().map(|block| block.date));

        let booked = self
            .booked_dates(property_id, start_date, end_date, exclude_booking)
            .await?;
        dates.extend(booked);

        Ok(dates)
    }

    /// Dates within [start_date, end_date] covered by non-canceled bookings.
    /// A booking overlapping the edge of the range only contributes the part
    /// of its span that falls inside it.
    pub async fn booked_dates(
        &self,
        property_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        exclude_booking: Option<Uuid>,
    ) -> AppResult<Vec<NaiveDate>> {
        let overlapping = self
            .bookings
            .find_overlapping(property_id, start_date, end_date, exclude_booking)
            .await?;

        let mut dates = Vec::new();

        for booking in overlapping {
            let clip_start = booking.start_date.max(start_date);
            let clip_end = booking.end_date.min(end_date);

            dates.extend(clip_start.iter_days().take_while(|date| *date <= clip_end));
        }

        Ok(dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Booking;
    use crate::models::PropertyBlock;
    use crate::repositories::{MockBookingRepository, MockPropertyBlockRepository};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service(
        bookings: MockBookingRepository,
        blocks: MockPropertyBlockRepository,
    ) -> AvailabilityService {
        AvailabilityService::new(Arc::new(bookings), Arc::new(blocks))
    }

    #[tokio::test]
    async fn returns_empty_set_when_nothing_overlaps() {
        let mut bookings = MockBookingRepository::new();
        let mut blocks = MockPropertyBlockRepository::new();

        bookings
            .expect_find_overlapping()
            .returning(|_, _, _, _| Ok(vec![]));
        blocks
            .expect_find_by_property_and_range()
            .returning(|_, _, _| Ok(vec![]));

        let unavailable = service(bookings, blocks)
            .unavailable_dates(Uuid::new_v4(), date(2024, 1, 1), date(2024, 1, 31), None)
            .await
            .unwrap();

        assert!(unavailable.is_empty());
    }

    #[tokio::test]
    async fn clips_overlapping_booking_to_queried_range() {
        let property_id = Uuid::new_v4();

        let mut bookings = MockBookingRepository::new();
        let mut blocks = MockPropertyBlockRepository::new();

        // Booking runs 2024-01-10..2024-01-20 but only the head of the range
        // is queried.
        bookings.expect_find_overlapping().returning(move |_, _, _, _| {
            Ok(vec![Booking::new(
                property_id,
                Uuid::new_v4(),
                date(2024, 1, 10),
                date(2024, 1, 20),
                1000,
            )])
        });
        blocks
            .expect_find_by_property_and_range()
            .returning(|_, _, _| Ok(vec![]));

        let unavailable = service(bookings, blocks)
            .unavailable_dates(property_id, date(2024, 1, 1), date(2024, 1, 12), None)
            .await
            .unwrap();

        let expected: BTreeSet<NaiveDate> =
            [date(2024, 1, 10), date(2024, 1, 11), date(2024, 1, 12)]
                .into_iter()
                .collect();
        assert_eq!(unavailable, expected);
    }

    #[tokio::test]
    async fn merges_blocks_and_bookings_without_duplicates() {
        let property_id = Uuid::new_v4();

        let mut bookings = MockBookingRepository::new();
        let mut blocks = MockPropertyBlockRepository::new();

        bookings.expect_find_overlapping().returning(move |_, _, _, _| {
            Ok(vec![Booking::new(
                property_id,
                Uuid::new_v4(),
                date(2024, 3, 2),
                date(2024, 3, 3),
                400,
            )])
        });
        // 2024-03-03 is both booked and blocked; it must appear once.
        blocks
            .expect_find_by_property_and_range()
            .returning(move |_, _, _| {
                Ok(vec![
                    PropertyBlock::new(property_id, date(2024, 3, 3), None),
                    PropertyBlock::new(property_id, date(2024, 3, 5), Some("maintenance".to_string())),
                ])
            });

        let unavailable = service(bookings, blocks)
            .unavailable_dates(property_id, date(2024, 3, 1), date(2024, 3, 31), None)
            .await
            .unwrap();

        let expected: BTreeSet<NaiveDate> =
            [date(2024, 3, 2), date(2024, 3, 3), date(2024, 3, 5)]
                .into_iter()
                .collect();
        assert_eq!(unavailable, expected);
    }

    #[tokio::test]
    async fn passes_exclusion_through_to_the_overlap_scan() {
        let excluded = Uuid::new_v4();

        let mut bookings = MockBookingRepository::new();
        let mut blocks = MockPropertyBlockRepository::new();

        bookings
            .expect_find_overlapping()
            .withf(move |_, _, _, exclude| *exclude == Some(excluded))
            .returning(|_, _, _, _| Ok(vec![]));
        blocks
            .expect_find_by_property_and_range()
            .returning(|_, _, _| Ok(vec![]));

        let unavailable = service(bookings, blocks)
            .unavailable_dates(
                Uuid::new_v4(),
                date(2024, 5, 1),
                date(2024, 5, 2),
                Some(excluded),
            )
            .await
            .unwrap();

        assert!(unavailable.is_empty());
    }
}
