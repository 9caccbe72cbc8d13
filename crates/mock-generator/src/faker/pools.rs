//! Word pools backing the built-in faker methods.

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Lisa", "Matthew", "Nancy", "Anthony", "Betty", "Mark",
    "Sandra", "Donald", "Ashley", "Steven", "Emily", "Andrew", "Michelle", "Joshua", "Amanda",
    "Kevin", "Melissa", "Brian", "Stephanie", "Aisha", "Mateo", "Priya", "Kenji", "Olga",
    "Tariq", "Ingrid", "Chidi",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Okafor", "Tanaka", "Kowalski", "Novak",
];

pub const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "PLC", "Ltd", "and Sons"];

pub const JOBS: &[&str] = &[
    "Accountant", "Architect", "Biomedical engineer", "Chemist", "Civil engineer",
    "Data scientist", "Dentist", "Editor", "Electrician", "Financial analyst",
    "Graphic designer", "Historian", "Journalist", "Lawyer", "Librarian", "Mechanic",
    "Nurse", "Pharmacist", "Physicist", "Pilot", "Research officer", "Software engineer",
    "Surveyor", "Teacher", "Translator", "Veterinarian",
];

pub const CITIES: &[&str] = &[
    "Springfield", "Riverside", "Fairview", "Franklin", "Greenville", "Bristol", "Clinton",
    "Georgetown", "Salem", "Madison", "Arlington", "Ashland", "Dover", "Oxford", "Jackson",
    "Burlington", "Manchester", "Milton", "Newport", "Auburn", "Lakewood", "Centerville",
];

pub const STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"), ("Alaska", "AK"), ("Arizona", "AZ"), ("California", "CA"),
    ("Colorado", "CO"), ("Florida", "FL"), ("Georgia", "GA"), ("Illinois", "IL"),
    ("Kansas", "KS"), ("Maine", "ME"), ("Michigan", "MI"), ("Nevada", "NV"),
    ("New York", "NY"), ("Ohio", "OH"), ("Oregon", "OR"), ("Texas", "TX"), ("Utah", "UT"),
    ("Vermont", "VT"), ("Virginia", "VA"), ("Washington", "WA"),
];

pub const COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Brazil", "Canada", "Chile", "Denmark", "Egypt", "Finland",
    "France", "Germany", "Ghana", "India", "Indonesia", "Ireland", "Italy", "Japan", "Kenya",
    "Mexico", "Netherlands", "New Zealand", "Nigeria", "Norway", "Peru", "Poland", "Portugal",
    "South Korea", "Spain", "Sweden", "Turkey", "United Kingdom", "United States", "Vietnam",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Place", "Boulevard", "Way",
    "Terrace",
];

pub const FREE_EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

pub const TLDS: &[&str] = &["com", "net", "org", "info", "biz", "io"];

pub const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
    "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris",
    "nisi", "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
];

pub const COLOR_NAMES: &[&str] = &[
    "AliceBlue", "Aqua", "Azure", "Beige", "Black", "Blue", "Brown", "Coral", "Crimson",
    "Cyan", "Gold", "Gray", "Green", "Indigo", "Ivory", "Khaki", "Lavender", "Lime", "Magenta",
    "Maroon", "Navy", "Olive", "Orange", "Orchid", "Pink", "Plum", "Purple", "Red", "Salmon",
    "Silver", "Tan", "Teal", "Tomato", "Turquoise", "Violet", "White", "Yellow",
];

pub const CURRENCY_CODES: &[&str] = &[
    "AUD", "BRL", "CAD", "CHF", "CNY", "EUR", "GBP", "INR", "JPY", "KRW", "MXN", "NOK", "NZD",
    "SEK", "USD", "ZAR",
];
