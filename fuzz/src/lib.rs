use bytes::Bytes;
use na_snbt::{BigEndian, Config, LittleEndian, Version, parse_text, read_from_buf, read_from_slice};

pub fn test_text(data: &[u8]) {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    for version in Version::ALL {
        let config = Config::new(version).with_max_depth(64);
        if let Ok(value) = parse_text(text, &config) {
            let _ = parse_text(&value.render_canonical(&config), &config);
            let _ = value.render_minimal(&config);
        }
    }
}

pub fn test_binary(data: &[u8]) {
    let config = Config::default().with_max_depth(64);
    if let Ok(tag) = read_from_slice::<BigEndian>(data, &config) {
        if let Ok(bytes) = tag.write_to_vec::<BigEndian>(&config) {
            assert!(read_from_slice::<BigEndian>(&bytes, &config).is_ok());
        }
        let _ = tag.value.render_canonical(&config);
    }
    if let Ok(tag) = read_from_slice::<LittleEndian>(data, &config) {
        let _ = tag.write_to_vec::<BigEndian>(&config);
    }
    let _ = read_from_buf::<BigEndian>(Bytes::copy_from_slice(data), &config);
}

pub fn test(data: &[u8]) {
    test_text(data);
    test_binary(data);
}
