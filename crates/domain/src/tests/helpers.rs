// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Catalog, FilmId, FilmListing, Season, SeasonId, SeasonInfo};

pub fn film(id: &str) -> FilmListing {
    FilmListing::bare(FilmId::new(id))
}

pub fn titled_film(id: &str, title: &str) -> FilmListing {
    FilmListing {
        id: FilmId::new(id),
        title: Some(title.to_string()),
        name: None,
    }
}

pub fn named_season(id: &str, name: &str) -> Season {
    Season {
        id: SeasonId::new(id),
        info: SeasonInfo {
            season_name: Some(name.to_string()),
            ..SeasonInfo::default()
        },
    }
}

pub fn film_ids(ids: &[&str]) -> Vec<FilmId> {
    ids.iter().map(|id| FilmId::new(id)).collect()
}

/// Films `f1`, `f2` with one empty season `s1`.
pub fn create_two_film_catalog() -> Catalog {
    Catalog::new(
        vec![film("f1"), film("f2")],
        vec![(named_season("s1", "Spring"), Vec::new())],
    )
    .unwrap()
}

/// Season `s1` holds `f1` and `f2`; season `s2` is empty; `f3` is unplaced.
pub fn create_populated_catalog() -> Catalog {
    Catalog::new(
        vec![film("f1"), film("f2"), film("f3")],
        vec![
            (named_season("s1", "Spring"), film_ids(&["f1", "f2"])),
            (named_season("s2", "Summer"), Vec::new()),
        ],
    )
    .unwrap()
}
