//! Defined HKID prefixes and their descriptions.
//!
//! The prefix grammar accepts any one or two letters, but only the codes
//! listed here have been assigned by the Registration of Persons Office.
//! Pseudo IDs for neonates born in public hospitals (`U`) are not included.

use serde::Serialize;

use crate::HkidError;

/// A defined prefix with its English and Traditional Chinese descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DefinedPrefix {
    /// The prefix code, e.g. `"A"` or `"WX"`.
    pub code: &'static str,
    /// Description in English.
    pub description: &'static str,
    /// Description in Traditional Chinese.
    pub localized_description: &'static str,
}

impl DefinedPrefix {
    const fn new(
        code: &'static str,
        description: &'static str,
        localized_description: &'static str,
    ) -> Self {
        Self {
            code,
            description,
            localized_description,
        }
    }

    /// Looks up a defined prefix. The code is matched case-insensitively.
    pub fn lookup(code: &str) -> Result<&'static DefinedPrefix, HkidError> {
        DEFINED_PREFIXES
            .iter()
            .find(|p| p.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| HkidError::UnknownPrefix {
                prefix: code.to_ascii_uppercase(),
            })
    }
}

/// Returns true if `code` is one of the defined prefixes.
pub fn is_defined_prefix(code: &str) -> bool {
    DefinedPrefix::lookup(code).is_ok()
}

const NO_CHINESE_NAME: &str = "ID card issues to person without a Chinese name before 27 March 1983";
const NO_CHINESE_NAME_TC: &str = "1983年3月27日前沒有中文姓名的新登記身份證人士。";

/// All defined prefixes.
pub static DEFINED_PREFIXES: &[DefinedPrefix] = &[
    DefinedPrefix::new(
        "A",
        "Original ID cards, issued between 1949 and 1962, most holders were born before 1950",
        "首批身份證，1949-1962年間在簽發，大部份人在1950年代之前出生。",
    ),
    DefinedPrefix::new(
        "B",
        "Issued between 1955 and 1960 in city offices",
        "1955-1960年間在市區辦事處簽發。",
    ),
    DefinedPrefix::new(
        "C",
        "Issued between 1960 and 1983 in NT offices, if a child most born between 1946 and 1971, principally HK born",
        "1960-1983年間在新界辦事處簽發，如小童申請人多於1946-1971年間出生，以香港出生者為主。",
    ),
    DefinedPrefix::new(
        "D",
        "Issued between 1960 and 1983 at HK Island office, if a child most born between, principally HK born",
        "1960-1983年間在港島辦事處簽發，如小童申請人多於1946-1971年間出生，以香港出生者為主。",
    ),
    DefinedPrefix::new(
        "E",
        "Issued between 1955 and 1969 in Kowloon offices, if a child most born between 1946 and 1962, principally HK born",
        "1955-1969年間在九龍辦事處簽發，如小童申請人多於1946-1962年間出生，以香港出生者為主。",
    ),
    DefinedPrefix::new(
        "F",
        "First issue of a card commencing from 24 February 2020",
        "2020年2月24日起首次獲簽發身份證的人士。",
    ),
    DefinedPrefix::new(
        "G",
        "Issued between 1967 and 1983 in Kowloon offices, if a child most born between 1956 and 1971",
        "1967-1983年間在九龍辦事處簽發，如小童申請人多於1956-1971年間出生。",
    ),
    DefinedPrefix::new(
        "H",
        "Issued between 1979 and 1983 in HK Island offices, if a child most born between 1968 and 1971, principally HK born",
        "1979-1983年間在港島辦事處簽發，如小童申請人多於1968-1971年間出生，以香港以外出生者為主。",
    ),
    DefinedPrefix::new(
        "J",
        "Consular officers after 23 October 1991",
        "1991年10月23日開始簽發予領事館僱員。",
    ),
    DefinedPrefix::new(
        "K",
        "First issue of an ID card between 28 March 1983 and 31 July 1990, if a child most born between 1972 and 1979",
        "1983年3月28日至1990年7月31日首次獲簽發身份證的人士，如小童申請人多於1972年至1979年6月在香港出生。",
    ),
    DefinedPrefix::new(
        "L",
        "Issued between 1983 and 2003, used when computer system malfunctioned",
        "1983-2003年間簽發，電腦系統故障時使用的備用號碼。2003年6月23日起停用。",
    ),
    DefinedPrefix::new(
        "M",
        "First issue of ID card between 1 August 2011 and 23 February 2020",
        "2011年8月1日至2020年2月23日首次獲簽發身份證的人士，如小童申請人多於2000年起在香港以外出生。",
    ),
    DefinedPrefix::new(
        "N",
        "Birth registered in Hong Kong after 1 June 2019",
        "2019年6月1日起於香港登記出生的人士。",
    ),
    DefinedPrefix::new(
        "P",
        "First issue of an ID card between 1 August 1990 and 27 December 2000, if a child most born between July and December 1979",
        "1990年8月1日至2000年12月27日首次獲簽發身份證的人士，如小童申請人多於1979年7月至12月在香港出生，或1980年代在香港以外出生。",
    ),
    DefinedPrefix::new(
        "R",
        "First issue of an ID card between 28 December 2000 and 31 July 2011",
        "2000年12月28日至2011年7月31日首次獲簽發身份證的人士，以香港以外出生者為主。",
    ),
    DefinedPrefix::new(
        "S",
        "Birth registered in Hong Kong between 1 April 2005 and 31 May 2019",
        "2005年4月1日至2019年5月31日於香港登記出生的人士。",
    ),
    DefinedPrefix::new(
        "T",
        "Issued between 1983 and 1997, used when computer system malfunctioned",
        "1983-1997年間簽發，電腦系統故障時使用的備用號碼。1997年7月1日起停用。",
    ),
    DefinedPrefix::new(
        "V",
        "Child under 11 issued with a \"Document of Identity for Visa Purposes\" between 28 March 1983 and 31 August 2003",
        "1983年3月28日至2003年8月31日獲簽發簽證身份書的11歲以下兒童。",
    ),
    DefinedPrefix::new(
        "W",
        "First issue to a foreign labourer or foreign domestic helper between 10 November 1989 and 1 January 2009",
        "1989年11月10日至2009年1月1日首次獲簽發身份證的外籍勞工及外籍家庭傭工。",
    ),
    DefinedPrefix::new(
        "Y",
        "Birth registered in Hong Kong between 1 January 1989 and 31 March 2005",
        "1989年1月1日至2005年3月31日於香港登記出生的人士。",
    ),
    DefinedPrefix::new(
        "Z",
        "Birth registered in Hong Kong between 1 January 1980 and 31 December 1988",
        "1980年1月1日至1988年12月31日於香港登記出生的人士。",
    ),
    DefinedPrefix::new(
        "WX",
        "First issue to a foreign labourer or foreign domestic helper since 2 January 2009",
        "2009年1月2日起首次獲簽發身份證的外籍勞工及外籍家庭傭工。",
    ),
    DefinedPrefix::new("XA", NO_CHINESE_NAME, NO_CHINESE_NAME_TC),
    DefinedPrefix::new("XB", NO_CHINESE_NAME, NO_CHINESE_NAME_TC),
    DefinedPrefix::new("XC", NO_CHINESE_NAME, NO_CHINESE_NAME_TC),
    DefinedPrefix::new("XD", NO_CHINESE_NAME, NO_CHINESE_NAME_TC),
    DefinedPrefix::new("XE", NO_CHINESE_NAME, NO_CHINESE_NAME_TC),
    DefinedPrefix::new("XG", NO_CHINESE_NAME, NO_CHINESE_NAME_TC),
    DefinedPrefix::new("XH", NO_CHINESE_NAME, NO_CHINESE_NAME_TC),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::is_prefix;

    #[test]
    fn test_registry_size() {
        assert_eq!(DEFINED_PREFIXES.len(), 28);
    }

    #[test]
    fn test_all_codes_valid_and_unique() {
        let codes: std::collections::HashSet<_> =
            DEFINED_PREFIXES.iter().map(|p| p.code).collect();
        assert_eq!(codes.len(), DEFINED_PREFIXES.len(), "Duplicate prefix codes found!");
        assert!(DEFINED_PREFIXES.iter().all(|p| is_prefix(p.code)));
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let wx = DefinedPrefix::lookup("wx").unwrap();
        assert_eq!(wx.code, "WX");
        assert!(wx.description.contains("foreign domestic helper"));
        assert!(wx.localized_description.contains("外籍家庭傭工"));
    }

    #[test]
    fn test_lookup_unknown() {
        for code in ["U", "I", "O", "Q", "X", "AB", ""] {
            let err = DefinedPrefix::lookup(code).unwrap_err();
            assert!(err.is_unknown_prefix(), "{code}");
            assert!(!is_defined_prefix(code));
        }
    }
}
