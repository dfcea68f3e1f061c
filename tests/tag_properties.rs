use hilight::tags::{Catalog, Product, ProductMatcher, TagsByCategory};
use hilight::{best_product, tag_similarity};
use proptest::prelude::*;

fn tag_list(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("#[가나다라마]{1,3}", 0..max)
}

fn selection() -> impl Strategy<Value = TagsByCategory> {
    (tag_list(4), tag_list(4)).prop_map(|(who, risk)| {
        let mut selected = TagsByCategory::new();
        selected.insert("누구".to_string(), who);
        selected.insert("위험".to_string(), risk);
        selected
    })
}

proptest! {
    #[test]
    fn score_is_never_negative(user in tag_list(8), product in tag_list(8)) {
        prop_assert!(tag_similarity(&user, &product) >= 0.0);
    }

    #[test]
    fn empty_side_scores_zero(tags in tag_list(8)) {
        let empty: Vec<String> = Vec::new();
        prop_assert_eq!(tag_similarity(&empty, &tags), 0.0);
        prop_assert_eq!(tag_similarity(&tags, &empty), 0.0);
    }

    #[test]
    fn exact_match_adds_exactly_one(
        user in tag_list(6),
        product in tag_list(6),
        overlapping in any::<bool>(),
    ) {
        // Neither keyword shares a syllable with the generated tags
        let fresh = if overlapping { "#바사" } else { "#Coverage" }.to_string();
        let mut user = user;
        user.push(fresh.clone());
        let mut product = product;
        if overlapping {
            // The fresh tag already earns a partial bonus from this one
            product.push("#바사보장".to_string());
        }

        let before = tag_similarity(&user, &product);
        product.push(fresh);
        let after = tag_similarity(&user, &product);

        prop_assert_eq!(after - before, 1.0);
    }

    #[test]
    fn single_user_tag_contributes_at_most_one_bonus(
        tag in "#[가나다라마]{1,3}",
        product in tag_list(10),
    ) {
        let score = tag_similarity(&[tag.clone()], &product);
        if product.contains(&tag) {
            prop_assert!(score == 1.0 || score == 1.5);
        } else {
            prop_assert!(score == 0.0 || score == 0.5);
        }
    }

    #[test]
    fn identical_products_resolve_to_first(
        risk in prop::collection::btree_set("#[가나다라마]{1,3}", 2..5),
    ) {
        let risk: Vec<String> = risk.into_iter().collect();
        let mut tags = TagsByCategory::new();
        tags.insert("위험".to_string(), risk);
        let catalog = Catalog::from_products(vec![
            Product::new("first", tags.clone()),
            Product::new("second", tags.clone()),
        ]);

        // Picking the product's own tags always clears the threshold
        prop_assert_eq!(best_product(&catalog, &tags), Some("first".to_string()));
    }

    #[test]
    fn best_product_matches_threshold(
        selected in selection(),
        a in tag_list(5),
        b in tag_list(5),
    ) {
        let mut tags_a = TagsByCategory::new();
        tags_a.insert("위험".to_string(), a);
        let mut tags_b = TagsByCategory::new();
        tags_b.insert("누구".to_string(), b);
        let catalog = Catalog::from_products(vec![
            Product::new("a", tags_a),
            Product::new("b", tags_b),
        ]);

        let matcher = ProductMatcher::new(&catalog);
        let top = matcher.rank(&selected).into_iter().next().map(|s| (s.name, s.score));
        let best = matcher.best_product(&selected);

        match top {
            Some((name, score)) if score >= 1.5 => prop_assert_eq!(best, Some(name)),
            _ => prop_assert_eq!(best, None),
        }
    }
}
