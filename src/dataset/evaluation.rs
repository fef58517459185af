use crate::model::evaluation::{
    EvalCasePlatform, EvalCaseStudy, EvalDimensions, EvalExample, EvalPlatform, EvalTiming,
    PlatformEvaluation, QueryKind, QueryTypeStats, normalize_depth,
};

pub const JUDGE_MODEL: &str = "google/gemini-3-flash-preview";

/// The raw evaluation export keeps quality scores on the unit interval.
fn points(unit: f64) -> f64 {
    unit * 100.0
}

/// Builds a dimension record from export values: five unit-interval quality
/// fractions plus the raw average result depth.
fn dims(
    relevance: f64,
    accuracy: f64,
    uniqueness: f64,
    depth: f64,
    high_quality_rate: f64,
    precision_at_k: f64,
) -> EvalDimensions {
    EvalDimensions {
        relevance: points(relevance),
        accuracy: points(accuracy),
        uniqueness: points(uniqueness),
        result_depth: normalize_depth(depth),
        high_quality_rate: points(high_quality_rate),
        precision_at_k: points(precision_at_k),
    }
}

fn kind_stats(kind: QueryKind, count: u32, avg: f64, dimensions: EvalDimensions) -> QueryTypeStats {
    QueryTypeStats { kind, count, avg_score: points(avg), dimensions }
}

/// Published evaluation summaries, one per [`EvalPlatform::summary`] platform,
/// in that order.
pub fn evaluations() -> Vec<PlatformEvaluation> {
    vec![
        PlatformEvaluation {
            platform: EvalPlatform::Lessie,
            total_queries: 310,
            total_queries_original: 358,
            total_persons: 16319,
            top_k_persons: 6231,
            judge_model: JUDGE_MODEL,
            timing: EvalTiming { total_time: "10.6h", avg_seconds_per_person: 2.46 },
            judge_score: points(0.8445),
            richness: points(0.8252),
            by_dimension: dims(0.8679, 0.9430, 0.6533, 48.4, 0.8231, 0.6745),
            by_query_type: [
                kind_stats(
                    QueryKind::B2bProspecting,
                    109,
                    0.8326,
                    dims(0.8326, 0.9404, 0.6429, 48.0, 0.7935, 0.6152),
                ),
                kind_stats(
                    QueryKind::Recruiting,
                    127,
                    0.8583,
                    dims(0.9029, 0.9551, 0.6639, 48.9, 0.8618, 0.7155),
                ),
                kind_stats(
                    QueryKind::InfluencerSearch,
                    36,
                    0.8661,
                    dims(0.8894, 0.9851, 0.6887, 59.5, 0.8247, 0.6559),
                ),
                kind_stats(
                    QueryKind::Deterministic,
                    35,
                    0.8275,
                    dims(0.8394, 0.8692, 0.6143, 38.1, 0.7921, 0.7724),
                ),
            ],
        },
        PlatformEvaluation {
            platform: EvalPlatform::Exa,
            total_queries: 360,
            total_queries_original: 360,
            total_persons: 9000,
            top_k_persons: 9000,
            judge_model: JUDGE_MODEL,
            timing: EvalTiming { total_time: "4.7h", avg_seconds_per_person: 1.89 },
            judge_score: points(0.7242),
            richness: points(0.8966),
            by_dimension: dims(0.5594, 0.9473, 0.6271, 25.0, 0.4716, 0.2993),
            by_query_type: [
                kind_stats(
                    QueryKind::B2bProspecting,
                    132,
                    0.6583,
                    dims(0.4369, 0.9473, 0.6027, 25.0, 0.3103, 0.1721),
                ),
                kind_stats(
                    QueryKind::Recruiting,
                    136,
                    0.8325,
                    dims(0.7920, 0.9728, 0.6788, 25.0, 0.7350, 0.5006),
                ),
                kind_stats(
                    QueryKind::InfluencerSearch,
                    44,
                    0.5564,
                    dims(0.3578, 0.9425, 0.5691, 25.0, 0.1582, 0.0936),
                ),
                kind_stats(
                    QueryKind::Deterministic,
                    45,
                    0.7541,
                    dims(0.4109, 0.8763, 0.5975, 25.0, 0.4524, 0.2684),
                ),
            ],
        },
        PlatformEvaluation {
            platform: EvalPlatform::Juicebox,
            total_queries: 352,
            total_queries_original: 360,
            total_persons: 8433,
            top_k_persons: 8333,
            judge_model: JUDGE_MODEL,
            timing: EvalTiming { total_time: "4.7h", avg_seconds_per_person: 2.03 },
            judge_score: points(0.7300),
            richness: points(0.9534),
            by_dimension: dims(0.5149, 0.9719, 0.6378, 23.7, 0.4558, 0.2922),
            by_query_type: [
                kind_stats(
                    QueryKind::B2bProspecting,
                    133,
                    0.6508,
                    dims(0.3618, 0.9855, 0.6153, 23.7, 0.2600, 0.1368),
                ),
                kind_stats(
                    QueryKind::Recruiting,
                    130,
                    0.8776,
                    dims(0.8442, 0.9854, 0.6945, 23.9, 0.8129, 0.5673),
                ),
                kind_stats(
                    QueryKind::InfluencerSearch,
                    42,
                    0.5403,
                    dims(0.2846, 0.9674, 0.5880, 23.9, 0.1114, 0.0677),
                ),
                kind_stats(
                    QueryKind::Deterministic,
                    45,
                    0.7123,
                    dims(0.2076, 0.8921, 0.5795, 22.4, 0.3171, 0.1635),
                ),
            ],
        },
    ]
}

fn example(name: &'static str, score: f64, verification: &'static str) -> EvalExample {
    EvalExample { name, score: points(score), verification }
}

fn case_platform(
    platform: EvalPlatform,
    judge: f64,
    num_persons: u32,
    relevance: f64,
    accuracy: f64,
    uniqueness: f64,
    richness: f64,
    good_examples: Vec<EvalExample>,
    bad_examples: Vec<EvalExample>,
) -> EvalCasePlatform {
    EvalCasePlatform {
        platform,
        judge_score: points(judge),
        num_persons,
        relevance: points(relevance),
        accuracy: points(accuracy),
        uniqueness: points(uniqueness),
        richness: points(richness),
        good_examples,
        bad_examples,
    }
}

/// Hand-verified representative queries from the evaluation run, one per
/// query kind.
pub fn eval_case_studies() -> Vec<EvalCaseStudy> {
    vec![
        EvalCaseStudy {
            query_id: "recruiting_0006",
            prompt: "Looking for product managers in Berlin who have experience in B2C products",
            kind: QueryKind::Recruiting,
            platforms: vec![
                case_platform(
                    EvalPlatform::Lessie,
                    0.8338,
                    77,
                    0.8455,
                    0.9857,
                    0.6688,
                    0.9333,
                    vec![
                        example(
                            "Sina Kasten",
                            0.95,
                            "Head of Product at igefa E-Commerce GmbH in Berlin. Background includes significant tenure at Zalando (major B2C fashion platform).",
                        ),
                        example(
                            "Sushrut Chafadker",
                            0.95,
                            "Co-Founder and CPO at topshelf, a B2C social networking and product discovery startup in Berlin.",
                        ),
                    ],
                    vec![],
                ),
                case_platform(
                    EvalPlatform::Exa,
                    0.9456,
                    25,
                    0.996,
                    0.988,
                    0.7,
                    0.844,
                    vec![
                        example(
                            "Boris Buckowitz",
                            0.97,
                            "Senior Product Manager at CHECK24 in Berlin since 2018, a major German B2C comparison platform.",
                        ),
                        example(
                            "Meggie Bouchard Bergevin",
                            0.97,
                            "Senior Product Manager II at HelloFresh with previous tenure at Zalando, both major B2C companies.",
                        ),
                    ],
                    vec![],
                ),
                case_platform(
                    EvalPlatform::Juicebox,
                    0.9164,
                    25,
                    0.908,
                    0.996,
                    0.664,
                    0.9774,
                    vec![
                        example(
                            "Franziska Zeiner",
                            0.97,
                            "Senior Product Manager at DigitalService in Berlin, background in gaming industry B2C products.",
                        ),
                        example(
                            "Galina Charni",
                            0.97,
                            "Senior Product Manager in Berlin, confirmed tenure at Zalando focusing on B2C customer experiences.",
                        ),
                    ],
                    vec![],
                ),
            ],
        },
        EvalCaseStudy {
            query_id: "b2b_0004",
            prompt: "Clothing store owners in USA, sustainable fashion, small to medium businesses",
            kind: QueryKind::B2bProspecting,
            platforms: vec![
                case_platform(
                    EvalPlatform::Lessie,
                    0.8345,
                    56,
                    0.7625,
                    1.0,
                    0.6946,
                    0.9333,
                    vec![
                        example(
                            "Eyen Duque",
                            0.96,
                            "Founder/CEO of Arkollab in Houston, TX - luxury resale platform focused on sustainable fashion and circular economy.",
                        ),
                        example(
                            "Paola Zc",
                            0.96,
                            "Founder/CEO of Zambony Couture in West Palm Beach, FL - boutique fashion brand emphasizing \"soul fashion\" over fast fashion.",
                        ),
                    ],
                    vec![],
                ),
                case_platform(
                    EvalPlatform::Exa,
                    0.922,
                    25,
                    0.916,
                    1.0,
                    0.74,
                    0.9333,
                    vec![
                        example(
                            "Acadia Herbst",
                            0.97,
                            "Owner of 111Threads, a small business focused on sustainable fashion and upcycling vintage clothing.",
                        ),
                        example(
                            "Cora Spearman",
                            0.97,
                            "Founder/CEO of Coradorables in Honolulu, HI - certified B Corporation sustainable fashion brand.",
                        ),
                    ],
                    vec![],
                ),
                case_platform(
                    EvalPlatform::Juicebox,
                    0.7428,
                    25,
                    0.52,
                    1.0,
                    0.692,
                    0.9333,
                    vec![
                        example(
                            "Stephanie Banaszak",
                            0.97,
                            "Founder of ERTH, a sustainable luxury boutique in La Conner, WA focusing on eco-conscious products.",
                        ),
                        example(
                            "Julian Reed",
                            0.96,
                            "Owner of Atomic Salvage in Denver, CO - curated vintage and secondhand apparel storefront.",
                        ),
                    ],
                    vec![],
                ),
            ],
        },
        EvalCaseStudy {
            query_id: "influencer_0001",
            prompt: "Find Brazilian finance/digital marketing influencers on Instagram with 5K-50K followers",
            kind: QueryKind::InfluencerSearch,
            platforms: vec![
                case_platform(
                    EvalPlatform::Lessie,
                    0.8312,
                    98,
                    0.8224,
                    0.9663,
                    0.6949,
                    0.7649,
                    vec![
                        example(
                            "Maicon Lima",
                            0.94,
                            "Brazilian financial educator, Instagram @maiconlimainvestidor with ~7.8K followers (within 5K-50K range).",
                        ),
                        example(
                            "Marina Moura (Financas da Gente)",
                            0.94,
                            "Brazilian financial educator, Instagram @financasdagente with ~13K followers (within 5K-50K range).",
                        ),
                    ],
                    vec![example(
                        "Daniel Carlos",
                        0.0,
                        "Profile could not be verified - evaluation returned zero scores across all dimensions.",
                    )],
                ),
                case_platform(
                    EvalPlatform::Exa,
                    0.5844,
                    25,
                    0.412,
                    0.884,
                    0.632,
                    0.92,
                    vec![example(
                        "Israel Pimentel",
                        0.93,
                        "Brazilian digital influencer @oisraelpimentel focusing on financial education with followers in range.",
                    )],
                    vec![],
                ),
                case_platform(EvalPlatform::Juicebox, 0.0, 0, 0.0, 0.0, 0.0, 0.0, vec![], vec![]),
            ],
        },
        EvalCaseStudy {
            query_id: "deterministic_0031",
            prompt: "Find employees at Mistral AI",
            kind: QueryKind::Deterministic,
            platforms: vec![
                case_platform(
                    EvalPlatform::Lessie,
                    0.9439,
                    80,
                    0.989,
                    0.98,
                    0.679,
                    0.9333,
                    vec![
                        example(
                            "Brian Cannon",
                            0.97,
                            "Verified current employee at Mistral AI, perfectly matching the search query.",
                        ),
                        example(
                            "Sophia Yang",
                            0.97,
                            "Verified current employee at Mistral AI, Head of Developer Relations.",
                        ),
                    ],
                    vec![],
                ),
                case_platform(
                    EvalPlatform::Exa,
                    0.798,
                    25,
                    0.788,
                    0.956,
                    0.544,
                    0.8666,
                    vec![example(
                        "Nicolas Schuhl",
                        0.97,
                        "Verified high-level employee at Mistral AI (co-founder).",
                    )],
                    vec![],
                ),
                case_platform(
                    EvalPlatform::Juicebox,
                    0.9292,
                    25,
                    0.972,
                    0.992,
                    0.664,
                    0.9333,
                    vec![
                        example(
                            "Soham Ghosh",
                            0.97,
                            "Verified current employee at Mistral AI.",
                        ),
                        example(
                            "Antoine Charpentier",
                            0.97,
                            "Verified current employee at Mistral AI.",
                        ),
                    ],
                    vec![],
                ),
            ],
        },
    ]
}
