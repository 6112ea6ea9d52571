//! Canonicalization behavior through the public API.

#[cfg(test)]
mod tests {
    use apisign::{canonical_query_string, sort_data};
    use serde_json::{Value, json};

    #[test]
    fn test_should_expose_sort_data_as_a_utility() {
        let data = json!({"b": {"y": 1, "x": 2}, "a": 1});
        let sorted = sort_data(&data);

        let keys: Vec<&str> = sorted
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(sort_data(&sorted), sorted);
    }

    #[test]
    fn test_should_flatten_the_way_the_deployed_builder_did() {
        let data = json!({
            "appKey": "1661408635",
            "noncestr": "abc",
            "timestamp": 1_661_408_635,
            "profile": {"name": "api client", "tags": ["a", "b"], "legacy": null},
            "active": true
        });
        let Value::Object(map) = data else {
            unreachable!()
        };

        assert_eq!(
            canonical_query_string(&map),
            "active=1&appKey=1661408635&noncestr=abc&\
             profile[name]=api client&profile[tags][0]=a&profile[tags][1]=b&\
             timestamp=1661408635"
        );
    }
}
