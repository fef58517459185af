use crate::model::cases::{CasePlatformResult, CaseStudy, SamplePerson};
use crate::model::keys::{Platform, Scenario};

const INF_001: CaseStudy = CaseStudy {
    id: "inf-001",
    query: "Find TikTok beauty influencers with 100K+ followers in the US",
    scenario: Scenario::Influencer,
    ground_truth_count: 30,
    platform_results: &[
        CasePlatformResult {
            platform: Platform::Lessie,
            matched_count: 27,
            total_returned: 48,
            sample_results: &[
                SamplePerson {
                    name: "Mikayla Nogueira",
                    title: "Beauty Creator",
                    platform_source: "TikTok",
                    profile_url: "https://tiktok.com/@mikaylanogueira",
                    has_email: true,
                    has_phone: false,
                    relevance_score: 96,
                    matched_ground_truth: true,
                },
                SamplePerson {
                    name: "Alix Earle",
                    title: "Lifestyle & Beauty",
                    platform_source: "TikTok",
                    profile_url: "https://tiktok.com/@alixearle",
                    has_email: true,
                    has_phone: true,
                    relevance_score: 94,
                    matched_ground_truth: true,
                },
                SamplePerson {
                    name: "NikkieTutorials",
                    title: "Beauty & Makeup Artist",
                    platform_source: "TikTok",
                    profile_url: "https://tiktok.com/@nikkietutorials",
                    has_email: true,
                    has_phone: false,
                    relevance_score: 91,
                    matched_ground_truth: true,
                },
            ],
        },
        CasePlatformResult {
            platform: Platform::Exa,
            matched_count: 22,
            total_returned: 35,
            sample_results: &[
                SamplePerson {
                    name: "Mikayla Nogueira",
                    title: "Beauty Creator",
                    platform_source: "TikTok",
                    profile_url: "https://tiktok.com/@mikaylanogueira",
                    has_email: true,
                    has_phone: false,
                    relevance_score: 92,
                    matched_ground_truth: true,
                },
                SamplePerson {
                    name: "James Charles",
                    title: "Makeup Artist",
                    platform_source: "TikTok",
                    profile_url: "https://tiktok.com/@jamescharles",
                    has_email: false,
                    has_phone: false,
                    relevance_score: 85,
                    matched_ground_truth: true,
                },
            ],
        },
        CasePlatformResult {
            platform: Platform::Dinq,
            matched_count: 18,
            total_returned: 30,
            sample_results: &[SamplePerson {
                name: "Alix Earle",
                title: "Beauty Influencer",
                platform_source: "TikTok",
                profile_url: "https://tiktok.com/@alixearle",
                has_email: false,
                has_phone: false,
                relevance_score: 88,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Manus,
            matched_count: 20,
            total_returned: 32,
            sample_results: &[SamplePerson {
                name: "Mikayla Nogueira",
                title: "Content Creator",
                platform_source: "TikTok",
                profile_url: "https://tiktok.com/@mikaylanogueira",
                has_email: false,
                has_phone: false,
                relevance_score: 86,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Gpt,
            matched_count: 16,
            total_returned: 25,
            sample_results: &[SamplePerson {
                name: "Charli D'Amelio",
                title: "TikTok Star",
                platform_source: "TikTok",
                profile_url: "https://tiktok.com/@charlidamelio",
                has_email: false,
                has_phone: false,
                relevance_score: 78,
                matched_ground_truth: false,
            }],
        },
        CasePlatformResult {
            platform: Platform::Gemini,
            matched_count: 14,
            total_returned: 22,
            sample_results: &[SamplePerson {
                name: "Addison Rae",
                title: "Content Creator",
                platform_source: "TikTok",
                profile_url: "https://tiktok.com/@addisonre",
                has_email: false,
                has_phone: false,
                relevance_score: 74,
                matched_ground_truth: false,
            }],
        },
    ],
};

const INF_002: CaseStudy = CaseStudy {
    id: "inf-002",
    query: "Find YouTube tech reviewers with high engagement rate",
    scenario: Scenario::Influencer,
    ground_truth_count: 25,
    platform_results: &[
        CasePlatformResult {
            platform: Platform::Lessie,
            matched_count: 23,
            total_returned: 45,
            sample_results: &[
                SamplePerson {
                    name: "Marques Brownlee",
                    title: "Tech Reviewer",
                    platform_source: "YouTube",
                    profile_url: "https://youtube.com/@mkbhd",
                    has_email: true,
                    has_phone: false,
                    relevance_score: 98,
                    matched_ground_truth: true,
                },
                SamplePerson {
                    name: "Linus Sebastian",
                    title: "Linus Tech Tips",
                    platform_source: "YouTube",
                    profile_url: "https://youtube.com/@linustechtips",
                    has_email: true,
                    has_phone: false,
                    relevance_score: 95,
                    matched_ground_truth: true,
                },
            ],
        },
        CasePlatformResult {
            platform: Platform::Exa,
            matched_count: 19,
            total_returned: 34,
            sample_results: &[SamplePerson {
                name: "Marques Brownlee",
                title: "MKBHD",
                platform_source: "YouTube",
                profile_url: "https://youtube.com/@mkbhd",
                has_email: true,
                has_phone: false,
                relevance_score: 95,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Dinq,
            matched_count: 16,
            total_returned: 28,
            sample_results: &[SamplePerson {
                name: "Dave Lee",
                title: "Dave2D",
                platform_source: "YouTube",
                profile_url: "https://youtube.com/@dave2d",
                has_email: false,
                has_phone: false,
                relevance_score: 87,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Manus,
            matched_count: 17,
            total_returned: 30,
            sample_results: &[SamplePerson {
                name: "iJustine",
                title: "Tech Creator",
                platform_source: "YouTube",
                profile_url: "https://youtube.com/@ijustine",
                has_email: false,
                has_phone: false,
                relevance_score: 82,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Gpt,
            matched_count: 15,
            total_returned: 24,
            sample_results: &[SamplePerson {
                name: "Marques Brownlee",
                title: "YouTuber",
                platform_source: "YouTube",
                profile_url: "https://youtube.com/@mkbhd",
                has_email: false,
                has_phone: false,
                relevance_score: 90,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Gemini,
            matched_count: 13,
            total_returned: 20,
            sample_results: &[SamplePerson {
                name: "Unbox Therapy",
                title: "Tech Channel",
                platform_source: "YouTube",
                profile_url: "https://youtube.com/@unboxtherapy",
                has_email: false,
                has_phone: false,
                relevance_score: 76,
                matched_ground_truth: true,
            }],
        },
    ],
};

const REC_001: CaseStudy = CaseStudy {
    id: "rec-001",
    query: "Find senior ML engineers who worked at FAANG companies",
    scenario: Scenario::Recruitment,
    ground_truth_count: 35,
    platform_results: &[
        CasePlatformResult {
            platform: Platform::Lessie,
            matched_count: 32,
            total_returned: 52,
            sample_results: &[
                SamplePerson {
                    name: "Sarah Chen",
                    title: "Staff ML Engineer, ex-Google",
                    platform_source: "LinkedIn",
                    profile_url: "https://linkedin.com/in/sarah-chen-ml",
                    has_email: true,
                    has_phone: true,
                    relevance_score: 97,
                    matched_ground_truth: true,
                },
                SamplePerson {
                    name: "James Park",
                    title: "Senior ML Engineer, ex-Meta",
                    platform_source: "LinkedIn",
                    profile_url: "https://linkedin.com/in/james-park-ai",
                    has_email: true,
                    has_phone: false,
                    relevance_score: 94,
                    matched_ground_truth: true,
                },
                SamplePerson {
                    name: "Priya Sharma",
                    title: "ML Lead, ex-Apple",
                    platform_source: "GitHub",
                    profile_url: "https://github.com/priyasharma-ml",
                    has_email: true,
                    has_phone: false,
                    relevance_score: 92,
                    matched_ground_truth: true,
                },
            ],
        },
        CasePlatformResult {
            platform: Platform::Exa,
            matched_count: 26,
            total_returned: 40,
            sample_results: &[
                SamplePerson {
                    name: "Sarah Chen",
                    title: "ML Engineer",
                    platform_source: "LinkedIn",
                    profile_url: "https://linkedin.com/in/sarah-chen-ml",
                    has_email: true,
                    has_phone: false,
                    relevance_score: 93,
                    matched_ground_truth: true,
                },
                SamplePerson {
                    name: "Alex Kim",
                    title: "AI Researcher, ex-Amazon",
                    platform_source: "LinkedIn",
                    profile_url: "https://linkedin.com/in/alex-kim-ai",
                    has_email: true,
                    has_phone: false,
                    relevance_score: 88,
                    matched_ground_truth: true,
                },
            ],
        },
        CasePlatformResult {
            platform: Platform::Dinq,
            matched_count: 24,
            total_returned: 36,
            sample_results: &[SamplePerson {
                name: "Michael Liu",
                title: "Senior Data Scientist, ex-Netflix",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/michael-liu-ds",
                has_email: false,
                has_phone: false,
                relevance_score: 85,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Manus,
            matched_count: 20,
            total_returned: 28,
            sample_results: &[SamplePerson {
                name: "Emily Zhang",
                title: "ML Engineer",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/emily-zhang",
                has_email: false,
                has_phone: false,
                relevance_score: 80,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Gpt,
            matched_count: 22,
            total_returned: 26,
            sample_results: &[SamplePerson {
                name: "David Wang",
                title: "Software Engineer",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/david-wang",
                has_email: false,
                has_phone: false,
                relevance_score: 82,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Gemini,
            matched_count: 19,
            total_returned: 24,
            sample_results: &[SamplePerson {
                name: "Rachel Lee",
                title: "AI Engineer",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/rachel-lee-ai",
                has_email: false,
                has_phone: false,
                relevance_score: 78,
                matched_ground_truth: true,
            }],
        },
    ],
};

const REC_002: CaseStudy = CaseStudy {
    id: "rec-002",
    query: "Find Stanford CS graduates working in AI startups",
    scenario: Scenario::Recruitment,
    ground_truth_count: 28,
    platform_results: &[
        CasePlatformResult {
            platform: Platform::Lessie,
            matched_count: 26,
            total_returned: 50,
            sample_results: &[
                SamplePerson {
                    name: "Andrew Ng (student)",
                    title: "Co-founder, Landing AI",
                    platform_source: "LinkedIn",
                    profile_url: "https://linkedin.com/in/andrew-ng-student",
                    has_email: true,
                    has_phone: false,
                    relevance_score: 96,
                    matched_ground_truth: true,
                },
                SamplePerson {
                    name: "Lisa Wu",
                    title: "CTO, AI Startup",
                    platform_source: "LinkedIn",
                    profile_url: "https://linkedin.com/in/lisa-wu-ai",
                    has_email: true,
                    has_phone: true,
                    relevance_score: 93,
                    matched_ground_truth: true,
                },
            ],
        },
        CasePlatformResult {
            platform: Platform::Exa,
            matched_count: 21,
            total_returned: 38,
            sample_results: &[SamplePerson {
                name: "Chris Ré",
                title: "Stanford Professor / Startup Advisor",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/chris-re",
                has_email: true,
                has_phone: false,
                relevance_score: 90,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Dinq,
            matched_count: 18,
            total_returned: 34,
            sample_results: &[SamplePerson {
                name: "Tom Brown",
                title: "Research Scientist",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/tom-brown-cs",
                has_email: false,
                has_phone: false,
                relevance_score: 84,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Manus,
            matched_count: 16,
            total_returned: 28,
            sample_results: &[SamplePerson {
                name: "Jennifer Lin",
                title: "ML Engineer",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/jennifer-lin",
                has_email: false,
                has_phone: false,
                relevance_score: 79,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Gpt,
            matched_count: 17,
            total_returned: 26,
            sample_results: &[SamplePerson {
                name: "Kevin Xu",
                title: "AI Founder",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/kevin-xu-ai",
                has_email: false,
                has_phone: false,
                relevance_score: 81,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Gemini,
            matched_count: 14,
            total_returned: 22,
            sample_results: &[SamplePerson {
                name: "Amy Zhou",
                title: "Data Scientist",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/amy-zhou",
                has_email: false,
                has_phone: false,
                relevance_score: 75,
                matched_ground_truth: true,
            }],
        },
    ],
};

const LEAD_001: CaseStudy = CaseStudy {
    id: "lead-001",
    query: "Find VP of Marketing at US SaaS companies",
    scenario: Scenario::LeadGen,
    ground_truth_count: 32,
    platform_results: &[
        CasePlatformResult {
            platform: Platform::Lessie,
            matched_count: 29,
            total_returned: 55,
            sample_results: &[
                SamplePerson {
                    name: "Karen Mitchell",
                    title: "VP of Marketing, HubSpot",
                    platform_source: "LinkedIn",
                    profile_url: "https://linkedin.com/in/karen-mitchell",
                    has_email: true,
                    has_phone: true,
                    relevance_score: 97,
                    matched_ground_truth: true,
                },
                SamplePerson {
                    name: "Brian Halligan",
                    title: "VP Marketing, Drift",
                    platform_source: "LinkedIn",
                    profile_url: "https://linkedin.com/in/brian-halligan",
                    has_email: true,
                    has_phone: true,
                    relevance_score: 95,
                    matched_ground_truth: true,
                },
                SamplePerson {
                    name: "Stephanie Liu",
                    title: "VP Growth Marketing, Notion",
                    platform_source: "LinkedIn",
                    profile_url: "https://linkedin.com/in/stephanie-liu-mkt",
                    has_email: true,
                    has_phone: false,
                    relevance_score: 93,
                    matched_ground_truth: true,
                },
            ],
        },
        CasePlatformResult {
            platform: Platform::Exa,
            matched_count: 24,
            total_returned: 42,
            sample_results: &[
                SamplePerson {
                    name: "Karen Mitchell",
                    title: "VP Marketing",
                    platform_source: "LinkedIn",
                    profile_url: "https://linkedin.com/in/karen-mitchell",
                    has_email: true,
                    has_phone: false,
                    relevance_score: 92,
                    matched_ground_truth: true,
                },
                SamplePerson {
                    name: "Mark Peterson",
                    title: "SVP Marketing, Salesforce",
                    platform_source: "LinkedIn",
                    profile_url: "https://linkedin.com/in/mark-peterson",
                    has_email: true,
                    has_phone: false,
                    relevance_score: 89,
                    matched_ground_truth: true,
                },
            ],
        },
        CasePlatformResult {
            platform: Platform::Dinq,
            matched_count: 22,
            total_returned: 38,
            sample_results: &[SamplePerson {
                name: "Laura Davis",
                title: "VP Marketing, Zendesk",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/laura-davis-mkt",
                has_email: false,
                has_phone: false,
                relevance_score: 86,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Manus,
            matched_count: 20,
            total_returned: 34,
            sample_results: &[SamplePerson {
                name: "Chris Johnson",
                title: "Marketing Director",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/chris-johnson",
                has_email: false,
                has_phone: false,
                relevance_score: 80,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Gpt,
            matched_count: 18,
            total_returned: 28,
            sample_results: &[SamplePerson {
                name: "Amanda Torres",
                title: "VP Marketing",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/amanda-torres",
                has_email: false,
                has_phone: false,
                relevance_score: 83,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Gemini,
            matched_count: 15,
            total_returned: 25,
            sample_results: &[SamplePerson {
                name: "Robert Kim",
                title: "Head of Marketing",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/robert-kim",
                has_email: false,
                has_phone: false,
                relevance_score: 76,
                matched_ground_truth: true,
            }],
        },
    ],
};

const LEAD_002: CaseStudy = CaseStudy {
    id: "lead-002",
    query: "Find founders of Series A fintech companies",
    scenario: Scenario::LeadGen,
    ground_truth_count: 26,
    platform_results: &[
        CasePlatformResult {
            platform: Platform::Lessie,
            matched_count: 24,
            total_returned: 50,
            sample_results: &[
                SamplePerson {
                    name: "Patrick Collison",
                    title: "CEO & Co-founder, Stripe",
                    platform_source: "LinkedIn",
                    profile_url: "https://linkedin.com/in/patrick-collison",
                    has_email: true,
                    has_phone: false,
                    relevance_score: 95,
                    matched_ground_truth: true,
                },
                SamplePerson {
                    name: "Vlad Tenev",
                    title: "Co-founder, Robinhood",
                    platform_source: "LinkedIn",
                    profile_url: "https://linkedin.com/in/vlad-tenev",
                    has_email: true,
                    has_phone: true,
                    relevance_score: 93,
                    matched_ground_truth: true,
                },
            ],
        },
        CasePlatformResult {
            platform: Platform::Exa,
            matched_count: 20,
            total_returned: 40,
            sample_results: &[SamplePerson {
                name: "Max Levchin",
                title: "Founder, Affirm",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/max-levchin",
                has_email: true,
                has_phone: false,
                relevance_score: 90,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Dinq,
            matched_count: 18,
            total_returned: 36,
            sample_results: &[SamplePerson {
                name: "Jess Lee",
                title: "Fintech Founder",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/jess-lee-fin",
                has_email: false,
                has_phone: false,
                relevance_score: 84,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Manus,
            matched_count: 16,
            total_returned: 32,
            sample_results: &[SamplePerson {
                name: "Sam Bankman",
                title: "Fintech Entrepreneur",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/sam-bankman",
                has_email: false,
                has_phone: false,
                relevance_score: 78,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Gpt,
            matched_count: 15,
            total_returned: 28,
            sample_results: &[SamplePerson {
                name: "Anna Nguyen",
                title: "Startup Founder",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/anna-nguyen",
                has_email: false,
                has_phone: false,
                relevance_score: 80,
                matched_ground_truth: true,
            }],
        },
        CasePlatformResult {
            platform: Platform::Gemini,
            matched_count: 12,
            total_returned: 24,
            sample_results: &[SamplePerson {
                name: "Daniel Park",
                title: "Co-founder, Fintech Co",
                platform_source: "LinkedIn",
                profile_url: "https://linkedin.com/in/daniel-park-fin",
                has_email: false,
                has_phone: false,
                relevance_score: 72,
                matched_ground_truth: true,
            }],
        },
    ],
};

const CASE_STUDIES: &[CaseStudy] = &[INF_001, INF_002, REC_001, REC_002, LEAD_001, LEAD_002];

pub fn case_studies() -> &'static [CaseStudy] {
    CASE_STUDIES
}

pub fn case_by_id(id: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|c| c.id == id)
}
