use crate::models::artists::{ArtistListQuery, GallerySort, Model};

/// Refine the available-artist list for the gallery: case-insensitive
/// search over stage name and bio, genre membership, city match, sort, and
/// pagination. Runs over rows already fetched newest-first.
pub fn refine(mut profiles: Vec<Model>, query: &ArtistListQuery) -> Vec<Model> {
    if let Some(search) = query.search.as_deref() {
        let needle = search.to_lowercase();
        if !needle.is_empty() {
            profiles.retain(|p| {
                p.stage_name.to_lowercase().contains(&needle)
                    || p.bio.to_lowercase().contains(&needle)
            });
        }
    }

    if let Some(genre) = query.genre.as_deref() {
        let genre = genre.to_lowercase();
        profiles.retain(|p| p.genres.0.iter().any(|g| g.to_lowercase() == genre));
    }

    if let Some(city) = query.city.as_deref() {
        let city = city.to_lowercase();
        profiles.retain(|p| p.city.to_lowercase() == city);
    }

    match query.sort.unwrap_or(GallerySort::Newest) {
        // Input order is already newest-first.
        GallerySort::Newest => {}
        GallerySort::Name => {
            profiles.sort_by(|a, b| a.stage_name.to_lowercase().cmp(&b.stage_name.to_lowercase()));
        }
        GallerySort::Rate => {
            profiles.sort_by(|a, b| {
                a.event_rate
                    .partial_cmp(&b.event_rate)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
    }

    let limit = query.limit() as usize;
    let offset = ((query.page() - 1) as usize).saturating_mul(limit);

    profiles.into_iter().skip(offset).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::artists::Tags;
    use chrono::Utc;
    use uuid::Uuid;

    fn profile(stage_name: &str, city: &str, genres: &[&str], event_rate: f64) -> Model {
        Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            stage_name: stage_name.to_string(),
            bio: "Live act.".to_string(),
            city: city.to_string(),
            state: "TX".to_string(),
            genres: Tags(genres.iter().map(|g| g.to_string()).collect()),
            instruments: Tags(vec![]),
            website: None,
            instagram: None,
            spotify: None,
            image_url: None,
            hourly_rate: 100.0,
            event_rate,
            deposit_pct: 25,
            years_experience: 5,
            available: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn query() -> ArtistListQuery {
        ArtistListQuery {
            search: None,
            genre: None,
            city: None,
            sort: None,
            page: None,
            limit: None,
        }
    }

    #[test]
    fn search_matches_stage_name_case_insensitively() {
        let rows = vec![profile("The Midnight Echo", "Austin", &["indie"], 1200.0),
                        profile("Brass Collective", "Dallas", &["jazz"], 900.0)];
        let mut q = query();
        q.search = Some("midnight".to_string());
        let result = refine(rows, &q);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].stage_name, "The Midnight Echo");
    }

    #[test]
    fn genre_filter_requires_membership() {
        let rows = vec![profile("A", "Austin", &["Jazz", "funk"], 1000.0),
                        profile("B", "Austin", &["rock"], 1000.0)];
        let mut q = query();
        q.genre = Some("jazz".to_string());
        let result = refine(rows, &q);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].stage_name, "A");
    }

    #[test]
    fn rate_sort_is_ascending() {
        let rows = vec![profile("A", "Austin", &[], 2000.0),
                        profile("B", "Austin", &[], 800.0),
                        profile("C", "Austin", &[], 1400.0)];
        let mut q = query();
        q.sort = Some(GallerySort::Rate);
        let result = refine(rows, &q);
        let names: Vec<_> = result.iter().map(|p| p.stage_name.as_str()).collect();
        assert_eq!(names, ["B", "C", "A"]);
    }

    #[test]
    fn pagination_slices_after_filtering() {
        let rows: Vec<_> = (0..5).map(|i| profile(&format!("Act {i}"), "Austin", &[], 1000.0)).collect();
        let mut q = query();
        q.page = Some(2);
        q.limit = Some(2);
        let result = refine(rows, &q);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].stage_name, "Act 2");
    }
}
