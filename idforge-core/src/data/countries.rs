//! Country table
//!
//! Names are romanised so that email local parts stay ASCII.

use crate::types::{CountryConfig, PhoneRule};

const NORTH_AMERICA_FIRST: &[&str] = &[
    "James", "Michael", "Robert", "David", "William", "Joseph", "Daniel", "Matthew", "Ethan",
    "Olivia", "Emma", "Ava", "Sophia", "Isabella", "Mia", "Emily", "Abigail", "Madison",
];
const NORTH_AMERICA_LAST: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Wilson", "Anderson",
    "Taylor", "Thomas", "Moore", "Martin", "Jackson", "Thompson", "White", "Harris", "Clark",
];

const BRITISH_FIRST: &[&str] = &[
    "Oliver", "George", "Harry", "Jack", "Charlie", "Thomas", "Oscar", "Alfie", "Noah",
    "Amelia", "Isla", "Ava", "Grace", "Lily", "Freya", "Poppy", "Evie", "Sophie",
];
const BRITISH_LAST: &[&str] = &[
    "Smith", "Jones", "Taylor", "Brown", "Williams", "Wilson", "Evans", "Walker", "Wright",
    "Roberts", "Thompson", "Hughes", "Edwards", "Green", "Hall", "Wood", "Clarke", "Turner",
];

const GERMAN_FIRST: &[&str] = &[
    "Lukas", "Leon", "Finn", "Jonas", "Paul", "Felix", "Maximilian", "Elias", "Noah", "Anna",
    "Lena", "Mia", "Hannah", "Emilia", "Lea", "Clara", "Marie", "Sophie",
];
const GERMAN_LAST: &[&str] = &[
    "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker", "Schulz",
    "Hoffmann", "Koch", "Richter", "Klein", "Wolf", "Neumann", "Schwarz", "Zimmermann",
];

const FRENCH_FIRST: &[&str] = &[
    "Louis", "Gabriel", "Hugo", "Arthur", "Jules", "Adam", "Lucas", "Nathan", "Emma", "Jade",
    "Louise", "Alice", "Chloe", "Lina", "Manon", "Camille", "Ines", "Sarah",
];
const FRENCH_LAST: &[&str] = &[
    "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand", "Leroy",
    "Moreau", "Simon", "Laurent", "Lefebvre", "Michel", "Garcia", "Fournier", "Girard", "Roux",
];

const JAPANESE_FIRST: &[&str] = &[
    "Haruto", "Sota", "Yuto", "Riku", "Ren", "Hinata", "Kaito", "Takumi", "Yui", "Aoi",
    "Sakura", "Hina", "Mei", "Rin", "Yuna", "Akari", "Misaki", "Nanami",
];
const JAPANESE_LAST: &[&str] = &[
    "Sato", "Suzuki", "Takahashi", "Tanaka", "Watanabe", "Ito", "Yamamoto", "Nakamura",
    "Kobayashi", "Kato", "Yoshida", "Yamada", "Sasaki", "Yamaguchi", "Matsumoto", "Inoue",
];

const KOREAN_FIRST: &[&str] = &[
    "Minjun", "Seojun", "Dohyun", "Jiho", "Yejun", "Hajun", "Juwon", "Jihun", "Seoyeon",
    "Jiwoo", "Seoyun", "Minseo", "Hayun", "Jiyu", "Chaewon", "Sua",
];
const KOREAN_LAST: &[&str] = &[
    "Kim", "Lee", "Park", "Choi", "Jung", "Kang", "Cho", "Yoon", "Jang", "Lim", "Han", "Oh",
    "Seo", "Shin", "Kwon", "Hwang",
];

const CHINESE_FIRST: &[&str] = &[
    "Wei", "Fang", "Min", "Jing", "Lei", "Yan", "Hao", "Jun", "Ting", "Qiang", "Xinyi",
    "Zihan", "Yuxuan", "Haoran", "Yichen", "Jiayi", "Mingzhe", "Ruoxi",
];
const CHINESE_LAST: &[&str] = &[
    "Wang", "Li", "Zhang", "Liu", "Chen", "Yang", "Huang", "Zhao", "Wu", "Zhou", "Xu", "Sun",
    "Ma", "Zhu", "Hu", "Guo", "He", "Lin",
];

const HONG_KONG_FIRST: &[&str] = &[
    "Ka Ming", "Chi Wai", "Wing Yan", "Hoi Yan", "Tsz Hin", "Ka Yan", "Man Kit", "Siu Ling",
    "Wai Kit", "Pui Shan", "Chun Ho", "Yuk Ming",
];
const HONG_KONG_LAST: &[&str] = &[
    "Chan", "Wong", "Lee", "Cheung", "Lau", "Ng", "Leung", "Lam", "Ho", "Tang", "Yeung", "Tsang",
];

const TAIWAN_FIRST: &[&str] = &[
    "Yu Ting", "Chia Hao", "Yi Chen", "Cheng Han", "Shu Fen", "Po Wei", "Hsin Yi", "Chun Yu",
    "Mei Ling", "Yu Hsuan", "Tzu Yu", "Kuan Lin",
];
const TAIWAN_LAST: &[&str] = &[
    "Chen", "Lin", "Huang", "Chang", "Lee", "Wang", "Wu", "Liu", "Tsai", "Yang", "Hsu", "Cheng",
];

const SINGAPORE_FIRST: &[&str] = &[
    "Wei Jie", "Jun Wei", "Xin Yi", "Hui Min", "Marcus", "Ryan", "Nicole", "Rachel", "Arjun",
    "Nur Aisyah", "Siti", "Darren",
];
const SINGAPORE_LAST: &[&str] = &[
    "Tan", "Lim", "Lee", "Ng", "Ong", "Wong", "Goh", "Chua", "Koh", "Teo", "Kumar", "Rahman",
];

const INDIAN_FIRST: &[&str] = &[
    "Aarav", "Vivaan", "Aditya", "Arjun", "Reyansh", "Krishna", "Ishaan", "Rohan", "Aanya",
    "Diya", "Saanvi", "Ananya", "Priya", "Kavya", "Isha", "Meera",
];
const INDIAN_LAST: &[&str] = &[
    "Sharma", "Verma", "Patel", "Gupta", "Singh", "Kumar", "Reddy", "Iyer", "Nair", "Das",
    "Mehta", "Joshi", "Rao", "Chopra", "Malhotra", "Bose",
];

const BRAZILIAN_FIRST: &[&str] = &[
    "Miguel", "Arthur", "Heitor", "Bernardo", "Davi", "Gabriel", "Pedro", "Lucas", "Helena",
    "Alice", "Laura", "Manuela", "Valentina", "Sophia", "Isabella", "Julia",
];
const BRAZILIAN_LAST: &[&str] = &[
    "Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Alves", "Pereira",
    "Lima", "Gomes", "Costa", "Ribeiro", "Martins", "Carvalho", "Almeida", "Lopes",
];

/// All supported countries; the first entry is the default.
pub(crate) static COUNTRIES: [CountryConfig; 14] = [
    CountryConfig {
        code: "US",
        name: "United States",
        name_zh: "美国",
        phone: PhoneRule {
            dial_code: "+1",
            prefixes: &["201", "212", "305", "312", "415", "512", "617", "702", "713", "818"],
            template: "({p}) ###-####",
        },
        first_names: NORTH_AMERICA_FIRST,
        last_names: NORTH_AMERICA_LAST,
    },
    CountryConfig {
        code: "GB",
        name: "United Kingdom",
        name_zh: "英国",
        phone: PhoneRule {
            dial_code: "+44",
            prefixes: &["71", "73", "74", "75", "77", "78", "79"],
            template: "{p}## ######",
        },
        first_names: BRITISH_FIRST,
        last_names: BRITISH_LAST,
    },
    CountryConfig {
        code: "CA",
        name: "Canada",
        name_zh: "加拿大",
        phone: PhoneRule {
            dial_code: "+1",
            prefixes: &["403", "416", "514", "604", "613", "647", "780", "902"],
            template: "({p}) ###-####",
        },
        first_names: NORTH_AMERICA_FIRST,
        last_names: NORTH_AMERICA_LAST,
    },
    CountryConfig {
        code: "AU",
        name: "Australia",
        name_zh: "澳大利亚",
        phone: PhoneRule {
            dial_code: "+61",
            prefixes: &["40", "41", "42", "43", "45", "47"],
            template: "{p}# ### ###",
        },
        first_names: BRITISH_FIRST,
        last_names: BRITISH_LAST,
    },
    CountryConfig {
        code: "DE",
        name: "Germany",
        name_zh: "德国",
        phone: PhoneRule {
            dial_code: "+49",
            prefixes: &["151", "152", "157", "160", "170", "171", "175", "176", "177", "179"],
            template: "{p} ########",
        },
        first_names: GERMAN_FIRST,
        last_names: GERMAN_LAST,
    },
    CountryConfig {
        code: "FR",
        name: "France",
        name_zh: "法国",
        phone: PhoneRule {
            dial_code: "+33",
            prefixes: &["6", "7"],
            template: "{p} ## ## ## ##",
        },
        first_names: FRENCH_FIRST,
        last_names: FRENCH_LAST,
    },
    CountryConfig {
        code: "JP",
        name: "Japan",
        name_zh: "日本",
        phone: PhoneRule {
            dial_code: "+81",
            prefixes: &["70", "80", "90"],
            template: "{p}-####-####",
        },
        first_names: JAPANESE_FIRST,
        last_names: JAPANESE_LAST,
    },
    CountryConfig {
        code: "KR",
        name: "South Korea",
        name_zh: "韩国",
        phone: PhoneRule {
            dial_code: "+82",
            prefixes: &["10"],
            template: "{p}-####-####",
        },
        first_names: KOREAN_FIRST,
        last_names: KOREAN_LAST,
    },
    CountryConfig {
        code: "CN",
        name: "China",
        name_zh: "中国",
        phone: PhoneRule {
            dial_code: "+86",
            prefixes: &[
                "130", "131", "132", "135", "136", "137", "138", "139", "150", "151", "152",
                "158", "159", "186", "187", "188", "189",
            ],
            template: "{p} #### ####",
        },
        first_names: CHINESE_FIRST,
        last_names: CHINESE_LAST,
    },
    CountryConfig {
        code: "HK",
        name: "Hong Kong",
        name_zh: "香港",
        phone: PhoneRule {
            dial_code: "+852",
            prefixes: &["5", "6", "9"],
            template: "{p}### ####",
        },
        first_names: HONG_KONG_FIRST,
        last_names: HONG_KONG_LAST,
    },
    CountryConfig {
        code: "TW",
        name: "Taiwan",
        name_zh: "台湾",
        phone: PhoneRule {
            dial_code: "+886",
            prefixes: &["9"],
            template: "{p}## ### ###",
        },
        first_names: TAIWAN_FIRST,
        last_names: TAIWAN_LAST,
    },
    CountryConfig {
        code: "SG",
        name: "Singapore",
        name_zh: "新加坡",
        phone: PhoneRule {
            dial_code: "+65",
            prefixes: &["8", "9"],
            template: "{p}### ####",
        },
        first_names: SINGAPORE_FIRST,
        last_names: SINGAPORE_LAST,
    },
    CountryConfig {
        code: "IN",
        name: "India",
        name_zh: "印度",
        phone: PhoneRule {
            dial_code: "+91",
            prefixes: &["70", "88", "90", "91", "96", "97", "98"],
            template: "{p}### #####",
        },
        first_names: INDIAN_FIRST,
        last_names: INDIAN_LAST,
    },
    CountryConfig {
        code: "BR",
        name: "Brazil",
        name_zh: "巴西",
        phone: PhoneRule {
            dial_code: "+55",
            prefixes: &["11", "21", "31", "41", "51", "61"],
            template: "{p} 9####-####",
        },
        first_names: BRAZILIAN_FIRST,
        last_names: BRAZILIAN_LAST,
    },
];
