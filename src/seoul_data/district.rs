use strum::IntoEnumIterator;

/// The 25 autonomous districts (구) of Seoul, named as the Open Data API spells them.
#[derive(
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::Display,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
pub enum District {
    #[strum(serialize = "강남구")]
    Gangnam,
    #[strum(serialize = "강동구")]
    Gangdong,
    #[strum(serialize = "강북구")]
    Gangbuk,
    #[strum(serialize = "강서구")]
    Gangseo,
    #[strum(serialize = "관악구")]
    Gwanak,
    #[strum(serialize = "광진구")]
    Gwangjin,
    #[strum(serialize = "구로구")]
    Guro,
    #[strum(serialize = "금천구")]
    Geumcheon,
    #[strum(serialize = "노원구")]
    Nowon,
    #[strum(serialize = "도봉구")]
    Dobong,
    #[strum(serialize = "동대문구")]
    Dongdaemun,
    #[strum(serialize = "동작구")]
    Dongjak,
    #[strum(serialize = "마포구")]
    Mapo,
    #[strum(serialize = "서대문구")]
    Seodaemun,
    #[strum(serialize = "서초구")]
    Seocho,
    #[strum(serialize = "성동구")]
    Seongdong,
    #[strum(serialize = "성북구")]
    Seongbuk,
    #[strum(serialize = "송파구")]
    Songpa,
    #[strum(serialize = "양천구")]
    Yangcheon,
    #[strum(serialize = "영등포구")]
    Yeongdeungpo,
    #[strum(serialize = "용산구")]
    Yongsan,
    #[strum(serialize = "은평구")]
    Eunpyeong,
    #[strum(serialize = "종로구")]
    Jongno,
    #[strum(serialize = "중구")]
    Jung,
    #[strum(serialize = "중랑구")]
    Jungnang,
}

impl District {
    pub fn korean_names() -> Vec<&'static str> {
        District::iter().map(Into::into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test_log::test]
    fn should_list_all_districts() {
        assert_eq!(District::korean_names().len(), 25);
    }

    #[test_log::test]
    fn should_parse_korean_name() {
        assert_eq!(District::from_str("마포구"), Ok(District::Mapo));
        assert_eq!(District::Gangnam.to_string(), "강남구");
        assert!(District::from_str("해운대구").is_err());
    }
}
