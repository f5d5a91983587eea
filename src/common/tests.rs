#[cfg(test)]
mod common_tests {
    use log::LevelFilter;
    use crate::common::common::{log_level_filter, parse_query};

    #[test]
    fn test_parse_query_none() {
        let result = parse_query(None).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_parse_query_keeps_binary_values() {
        let query = Some(String::from("info_hash=%00%ff%10abc&port=6881"));
        let result = parse_query(query).unwrap();

        assert_eq!(result.get("info_hash").unwrap()[0], vec![0x00, 0xff, 0x10, b'a', b'b', b'c']);
        assert_eq!(result.get("port").unwrap()[0], b"6881".to_vec());
    }

    #[test]
    fn test_parse_query_repeated_keys() {
        let query = Some(String::from("info_hash=aaa&info_hash=bbb&info_hash=ccc"));
        let result = parse_query(query).unwrap();

        let values = result.get("info_hash").unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[1], b"bbb".to_vec());
    }

    #[test]
    fn test_parse_query_lowercases_keys() {
        let query = Some(String::from("NumWant=5"));
        let result = parse_query(query).unwrap();
        assert!(result.contains_key("numwant"));
    }

    #[test]
    fn test_parse_query_flag_without_value() {
        let query = Some(String::from("no_peer_id&compact=1"));
        let result = parse_query(query).unwrap();

        assert_eq!(result.get("no_peer_id").unwrap(), &vec![Vec::<u8>::new()]);
        assert_eq!(result.get("compact").unwrap()[0], b"1".to_vec());
    }

    #[test]
    fn test_parse_query_keeps_plus_literal() {
        let query = Some(String::from("trackerid=a+b&key=c%2Bd%20e"));
        let result = parse_query(query).unwrap();

        assert_eq!(result.get("trackerid").unwrap()[0], b"a+b".to_vec());
        assert_eq!(result.get("key").unwrap()[0], b"c+d e".to_vec());
    }

    #[test]
    fn test_parse_query_skips_empty_items() {
        let query = Some(String::from("&&left=0&"));
        let result = parse_query(query).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_parse_query_rejects_empty_key() {
        let query = Some(String::from("=value"));
        assert!(parse_query(query).is_err());
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(log_level_filter("debug"), Some(LevelFilter::Debug));
        assert_eq!(log_level_filter("off"), Some(LevelFilter::Off));
        assert_eq!(log_level_filter("verbose"), None);
    }
}
