//! Static educational content shown on the non-scoring pages.

pub const HEALTHY_HABITS: [&str; 5] = [
    "Walk 30 minutes daily",
    "Drink enough water",
    "Regular exercise",
    "Proper sleep",
    "Avoid smoking & alcohol",
];

pub const DIET_PLAN: [(&str, &str); 5] = [
    ("Breakfast", "Oats, fruits, eggs"),
    ("Lunch", "Brown rice, vegetables"),
    ("Snacks", "Fruits & nuts"),
    ("Dinner", "Light meals"),
    ("Avoid", "Sugary & junk food"),
];

pub const PREVENTION_TIPS: [&str; 5] = [
    "Regular checkups",
    "Fiber-rich food",
    "Maintain healthy weight",
    "Stress control",
    "Avoid sedentary lifestyle",
];
