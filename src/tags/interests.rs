//! Built-in interest tag map
//!
//! Each interest offers a fixed set of tags per category. The wizard shows
//! the first few of each category as recommendations and lets the user pick
//! from the rest.

use std::collections::{BTreeSet, HashMap};

use super::category::{Category, TagsByCategory};

/// Number of tags per category offered up front
pub const RECOMMENDED_PER_CATEGORY: usize = 4;

/// Interest definition
pub struct Interest {
    pub name: &'static str,
    pub who: &'static [&'static str],
    pub risk: &'static [&'static str],
    pub priority: &'static [&'static str],
    pub change: &'static [&'static str],
}

impl Interest {
    pub fn tags(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Who => self.who,
            Category::Risk => self.risk,
            Category::Priority => self.priority,
            Category::Change => self.change,
        }
    }
}

/// Interests in the order they are presented
pub const INTERESTS: &[Interest] = &[
    Interest {
        name: "자녀/육아",
        who: &[
            "#우리_아이",
            "#자녀",
            "#태아",
            "#산모",
            "#가족",
            "#0세",
            "#15세",
            "#30세",
            "#만12세이하자녀",
        ],
        risk: &[
            "#학교폭력",
            "#학교폭력피해치료",
            "#선천이상",
            "#성장단계별보장",
            "#일상_생활책임",
            "#화상",
            "#골절",
            "#질병",
        ],
        priority: &[
            "#성장단계별보장",
            "#폭넓은보장",
            "#납입면제",
            "#건강관리서비스",
            "#어린이할인특약",
        ],
        change: &["#자녀입학", "#출산예정"],
    },
    Interest {
        name: "운전",
        who: &[
            "#운전자",
            "#나",
            "#현대차_블루링크_가입고객",
            "#기아_커넥트_서비스_가입고객",
            "#제네시스_커넥티드_서비스_가입고객",
            "#KG_MOBILITY_인포콘_서비스_가입고객",
            "#르노코리아_서비스_가입고객",
            "#메르세데스벤츠_Mercedes_me_서비스_가입고객",
        ],
        risk: &[
            "#교통사고",
            "#자동차사고",
            "#자동차사고벌금",
            "#변호사선임비용",
            "#형사합의금",
            "#면허정지",
            "#면허취소",
            "#자동차사고처리지원금",
        ],
        priority: &[
            "#안전운전할인",
            "#블랙박스할인특약",
            "#커넥티드카할인특약",
            "#스마트안전운전UBI할인특약",
            "#첨단안전장치장착할인특약",
            "#Eco마일리지특약",
            "#대중교통이용할인특약",
        ],
        change: &["#신차출고"],
    },
    Interest {
        name: "주택/부동산",
        who: &["#주택소유자", "#다주택자", "#가족"],
        risk: &[
            "#화재",
            "#누수_화재",
            "#가전제품고장",
            "#일상_생활책임",
            "#배상책임",
            "#도난/파손",
        ],
        priority: &["#폭넓은보장", "#가성비_보험료"],
        change: &["#이사", "#내집마련"],
    },
    Interest {
        name: "반려동물",
        who: &["#반려견", "#반려묘"],
        risk: &[
            "#피부질환",
            "#구강질환",
            "#슬개골",
            "#배상책임",
            "#입원치료비",
            "#통원치료비",
            "#상해",
            "#질병",
        ],
        priority: &[
            "#보험료할인",
            "#특정처치보장",
            "#특정약물치료보장",
            "#다빈도질병보상",
        ],
        change: &["#반려동물입양"],
    },
    Interest {
        name: "여행/레저",
        who: &["#나", "#가족"],
        risk: &[
            "#상해",
            "#골절",
            "#화상",
            "#상해후유장해",
            "#배상책임",
            "#휴대품손해",
        ],
        priority: &["#종합보장", "#가성비_보험료"],
        change: &[],
    },
    Interest {
        name: "건강",
        who: &["#나", "#부모님", "#가족", "#40세", "#60세"],
        risk: &[
            "#암_중증질환",
            "#뇌혈관질환",
            "#심장질환",
            "#허혈심장질환",
            "#수술_입원비",
            "#진단비",
            "#치료비",
            "#항암약물치료",
            "#방사선치료",
            "#전이암",
            "#간병인사용",
            "#질병",
            "#3대질병",
            "#사망",
            "#후유장해",
            "#치매",
        ],
        priority: &[
            "#100세보장",
            "#간편가입",
            "#가성비_보험료",
            "#든든한_진단비",
            "#매년_주요치료비_지급",
            "#유병자도가입가능",
            "#종합보장",
            "#연금액_지급",
            "#노후준비",
        ],
        change: &["#유병자경력", "#건강검진예정", "#노후준비"],
    },
];

lazy_static::lazy_static! {
    static ref INTEREST_INDEX: HashMap<&'static str, &'static Interest> =
        INTERESTS.iter().map(|i| (i.name, i)).collect();
}

pub fn find_interest(name: &str) -> Option<&'static Interest> {
    INTEREST_INDEX.get(name.trim()).copied()
}

/// Interest names in presentation order
pub fn all_interests() -> Vec<&'static str> {
    INTERESTS.iter().map(|i| i.name).collect()
}

/// The first few tags of every category for an interest.
/// Unknown interests yield an empty map.
pub fn recommended_tags_for_interest(interest: &str) -> TagsByCategory {
    let Some(interest) = find_interest(interest) else {
        return TagsByCategory::new();
    };

    Category::ALL
        .into_iter()
        .map(|category| {
            let tags = interest
                .tags(category)
                .iter()
                .take(RECOMMENDED_PER_CATEGORY)
                .map(|t| t.to_string())
                .collect();
            (category.label().to_string(), tags)
        })
        .collect()
}

/// Every tag of a category across all interests, deduplicated and sorted
pub fn all_tags_by_category(category: Category) -> Vec<String> {
    INTERESTS
        .iter()
        .flat_map(|i| i.tags(category).iter().copied())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
