// src/core/dataset.rs
//! Built-in tables the lexicon is seeded from.

use crate::core::types::{Difficulty, PhraseCategory, RegionalLanguage};

/// Every gesture the avatar has an asset for.
pub const GESTURE_VOCABULARY: &[&str] = &[
    "0", "1", "10", "100", "11", "12", "13", "2", "3", "4", "5", "6", "7", "8", "9",
    "a", "about", "above", "absorb", "accept", "access", "accident", "accuse", "across",
    "act", "acting", "active", "actor", "actress", "add", "advice", "advise", "aeroplane",
    "afraid", "africa", "after", "afternoon", "age", "agree", "alive", "all", "allah",
    "allow", "alone", "always", "ambulance", "america", "among", "angry", "announce",
    "answer", "any", "anything", "appear", "apple", "appointment", "april", "are", "area",
    "argue", "around", "arrange", "arrest", "arrive", "art", "asia", "askanything",
    "askquestion", "at", "attend", "available", "avoid", "awful", "b", "bad", "badminton",
    "bag", "ball", "bat", "bath", "beautiful", "become", "before", "begin", "behind",
    "bell", "below", "bench", "best", "better", "between", "big", "bird", "black",
    "blackboard", "blue", "boat", "body", "book", "borrow", "bowl", "boxing", "boy",
    "break", "bridge", "bring", "britain", "broom", "brown", "brush", "build", "building",
    "busy", "bye", "c", "call", "can", "cancel", "cannot", "car", "carry", "catch",
    "center", "certificate", "chair", "chalk", "check", "chemistry", "child", "children",
    "christian", "christmas", "church", "cinema", "circle", "circus", "clap", "class",
    "classroom", "climb", "close", "cloud", "clown", "collect", "college", "colour",
    "come", "communicate", "communication", "compare", "computer", "concentrate", "confuse",
    "congratulations", "contact", "continue", "control", "cook", "copy", "correct",
    "council", "count", "cover", "crash", "cricket", "cry", "cup", "cut", "cycle",
    "d", "dance", "date", "day", "deaf", "decrease", "delete", "desk", "detail",
    "develop", "different", "difficult", "discuss", "divide", "doctor", "down", "draw",
    "dream", "drinking", "e", "easy", "eat", "education", "eight", "eighteen", "eleven",
    "email", "empty", "encourage", "end", "engineer", "england", "english", "enjoy",
    "enter", "equal", "eraser", "escape", "evening", "every", "everyday", "exam",
    "examination", "examine", "example", "expensive", "experience", "f", "factory",
    "fail", "fall", "far", "farmer", "fat", "father", "fear", "february", "feed",
    "feel", "few", "fifteen", "fight", "fill", "finish", "five", "flood", "floor",
    "fly", "food", "forever", "forgive", "form", "four", "fourteen", "france", "friday",
    "fruit", "g", "germany", "get", "girl", "give-me", "go", "gold", "good", "greece",
    "green", "grey", "h", "half-past", "hang", "hardofhearing", "havealook", "he",
    "health", "hearing", "hello", "help-me", "help-you", "her", "here", "hers", "hill",
    "him", "himself", "hindi", "hindu", "his", "hockey", "hold", "home", "hospital",
    "hot", "hour", "house", "how", "howareyou", "howmany", "howmuch", "hundred", "hungry",
    "i", "idea", "ignore", "important", "impossible", "improve", "in", "increase",
    "informus", "injection", "intelligent", "interesting", "internet", "interpreter",
    "iunderstand", "j", "january", "jealous", "jesus", "join", "jump", "june", "k",
    "keep", "key", "keyboard", "kite", "know", "knowledge", "l", "laboratory", "ladder",
    "languages", "late", "later", "laugh", "learn", "leave", "lecturer", "lend", "less",
    "letter", "level", "library", "light", "like", "line", "list", "little", "lock",
    "long", "lose", "loss", "loud", "love", "m", "man", "mango", "many", "march",
    "married", "may", "maybe", "me", "meet", "mind", "mistake", "monday", "money",
    "more", "morning", "mother", "my", "n", "name", "namewhat", "national", "near",
    "need", "needle", "never", "new", "news", "next", "nextyear", "nice", "night",
    "nine", "nineteen", "no", "none", "not", "now", "number", "nurse", "o", "offer",
    "office", "officer", "often", "old", "olympics", "on", "one", "onion", "open",
    "operation", "or", "orange", "order", "our", "ourself", "out", "over", "own",
    "p", "pay", "pen", "person", "phone", "pick", "pink", "plan", "please", "possible",
    "practice", "prayer", "pretend", "print", "problem", "profit", "provide", "purple",
    "q", "question", "quick", "quiet", "quote", "r", "rain", "reach", "read", "ready",
    "receive", "reception", "rectangle", "red", "regular", "relate", "relation", "remind",
    "remove", "repeat", "research", "responsibility", "responsible", "result", "roof",
    "run", "s", "sad", "same", "save", "say", "science", "scotland", "screen", "search",
    "see", "send", "seven", "seventeen", "shake", "short", "sign", "silver", "six",
    "sixteen", "slow", "small", "soft", "sorry", "spelling", "stay", "stop", "stubborn",
    "stupid", "sunday", "switzerland", "t", "table", "tablet", "take", "talk", "tall",
    "taste", "taxi", "teach", "teacher", "teachme", "teachyou", "tear", "tease",
    "technical", "teeth", "temple", "ten", "tennis", "thankyou", "that", "their",
    "them", "themselves", "then", "there", "these", "they", "think", "thirsty", "thirteen",
    "this", "those", "thread", "three", "throw", "thumb", "thursday", "ticket", "tie",
    "tight", "time", "today", "together", "tomato", "tomorrow", "tools", "touch", "toward",
    "town", "track", "train", "transport", "travel", "tree", "trophy", "truck", "truth",
    "try", "tuesday", "turn", "tv", "twelve", "twenty", "two", "u", "ugly", "umbrella",
    "under", "understand", "uniform", "university", "until", "up", "us", "v", "van",
    "vegetable", "vegetables", "very", "video", "visit", "volleyball", "w", "wait",
    "walk", "want", "was", "wash", "waste", "water", "we", "weapon", "wear", "weather",
    "wednesday", "week", "weigh", "weight", "welcome", "well", "west", "what", "wheat",
    "when", "where", "which", "white", "who", "why", "wide", "will", "win", "wire",
    "wish", "with", "without", "woman", "word", "work", "worry", "worse", "worst",
    "write", "wrong", "x", "y", "yeah", "yellow", "yes", "yesterday", "you", "your",
    "yours", "yourself", "yourselves", "z", "zebra-crossing", "zero", "zoo",
];

/// (word, sign, category) rows of the action dataset. Every sign is a
/// vocabulary member.
pub const ACTION_DATASET: &[(&str, &str, &str)] = &[
    ("airplane", "aeroplane", "transport"),
    ("plane", "aeroplane", "transport"),
    ("flight", "aeroplane", "transport"),
    ("automobile", "car", "transport"),
    ("bicycle", "cycle", "transport"),
    ("bike", "cycle", "transport"),
    ("cab", "taxi", "transport"),
    ("lorry", "truck", "transport"),
    ("train", "train", "transport"),
    ("eat", "eat", "action"),
    ("run", "run", "action"),
    ("jump", "jump", "action"),
    ("try", "try", "action"),
    ("walk", "walk", "action"),
    ("read", "read", "action"),
    ("write", "write", "action"),
    ("dance", "dance", "action"),
    ("cook", "cook", "action"),
    ("drink", "drinking", "action"),
    ("sip", "drinking", "action"),
    ("give", "give-me", "action"),
    ("help", "help-me", "action"),
    ("assist", "help-me", "action"),
    ("look", "havealook", "action"),
    ("watch", "see", "action"),
    ("view", "see", "action"),
    ("speak", "talk", "action"),
    ("chat", "talk", "action"),
    ("tell", "say", "action"),
    ("start", "begin", "action"),
    ("commence", "begin", "action"),
    ("complete", "finish", "action"),
    ("halt", "stop", "action"),
    ("hurry", "quick", "action"),
    ("fast", "quick", "action"),
    ("jog", "run", "action"),
    ("sprint", "run", "action"),
    ("stroll", "walk", "action"),
    ("study", "learn", "education"),
    ("lesson", "class", "education"),
    ("school", "classroom", "education"),
    ("test", "exam", "education"),
    ("professor", "lecturer", "education"),
    ("tutor", "teacher", "education"),
    ("lab", "laboratory", "education"),
    ("rubber", "eraser", "education"),
    ("film", "cinema", "entertainment"),
    ("movie", "cinema", "entertainment"),
    ("television", "tv", "entertainment"),
    ("mobile", "phone", "communication"),
    ("telephone", "phone", "communication"),
    ("cellphone", "phone", "communication"),
    ("mail", "email", "communication"),
    ("message", "letter", "communication"),
    ("laptop", "computer", "communication"),
    ("web", "internet", "communication"),
    ("large", "big", "description"),
    ("huge", "big", "description"),
    ("tiny", "small", "description"),
    ("pretty", "beautiful", "description"),
    ("lovely", "beautiful", "description"),
    ("terrible", "awful", "description"),
    ("silent", "quiet", "description"),
    ("costly", "expensive", "description"),
    ("simple", "easy", "description"),
    ("hard", "difficult", "description"),
    ("dad", "father", "people"),
    ("papa", "father", "people"),
    ("mom", "mother", "people"),
    ("mum", "mother", "people"),
    ("kid", "child", "people"),
    ("kids", "children", "people"),
    ("lady", "woman", "people"),
    ("doc", "doctor", "people"),
    ("physician", "doctor", "people"),
    ("hospital", "hospital", "places"),
    ("clinic", "hospital", "places"),
    ("house", "house", "places"),
    ("residence", "home", "places"),
    ("city", "town", "places"),
    ("cash", "money", "objects"),
    ("ball", "ball", "objects"),
    ("scared", "afraid", "emotion"),
    ("fear", "fear", "emotion"),
    ("furious", "angry", "emotion"),
    ("unhappy", "sad", "emotion"),
    ("goodbye", "bye", "greeting"),
    ("hi", "hello", "greeting"),
    ("thanks", "thankyou", "greeting"),
];

pub struct PhraseRow {
    pub phrase: &'static str,
    pub signs: &'static [&'static str],
    pub category: PhraseCategory,
    pub difficulty: Difficulty,
}

const fn phrase(
    phrase: &'static str,
    signs: &'static [&'static str],
    category: PhraseCategory,
) -> PhraseRow {
    PhraseRow { phrase, signs, category, difficulty: Difficulty::Beginner }
}

pub const PHRASES: &[PhraseRow] = &[
    phrase("hello", &["hello"], PhraseCategory::Greeting),
    phrase("thank you", &["thankyou"], PhraseCategory::Greeting),
    phrase("how are you", &["you", "how"], PhraseCategory::Greeting),
    phrase("howareyou", &["you", "how"], PhraseCategory::Greeting),
    phrase("good morning", &["good", "morning"], PhraseCategory::Greeting),
    phrase("good night", &["good", "night"], PhraseCategory::Greeting),
    phrase("good afternoon", &["good", "afternoon"], PhraseCategory::Greeting),
    phrase("nice to meet you", &["nice", "meet", "you"], PhraseCategory::Greeting),
    phrase("see you later", &["see", "you", "later"], PhraseCategory::Greeting),
    phrase("what is your name", &["you", "name", "what"], PhraseCategory::Question),
    phrase("namewhat", &["name", "what"], PhraseCategory::Question),
    phrase("where do you live", &["you", "where", "live"], PhraseCategory::Question),
    phrase("how old are you", &["you", "age", "how"], PhraseCategory::Question),
    phrase("what time is it", &["time", "what"], PhraseCategory::Question),
    phrase("can you help me", &["you", "me", "help-me"], PhraseCategory::Question),
    phrase("i am hungry", &["i", "hungry"], PhraseCategory::Daily),
    phrase("i am thirsty", &["i", "thirsty"], PhraseCategory::Daily),
    phrase("i need water", &["i", "water", "need"], PhraseCategory::Daily),
    phrase("i need help", &["i", "help-me"], PhraseCategory::Daily),
    phrase("i dont understand", &["i", "understand", "not"], PhraseCategory::Daily),
    phrase("please repeat", &["please", "repeat"], PhraseCategory::Daily),
    phrase("thank you very much", &["thankyou", "very"], PhraseCategory::Daily),
    phrase("i need doctor", &["i", "doctor", "need"], PhraseCategory::Emergency),
    phrase("call ambulance", &["ambulance", "call"], PhraseCategory::Emergency),
    phrase("where is hospital", &["hospital", "where"], PhraseCategory::Emergency),
    phrase("i am learning", &["i", "learn"], PhraseCategory::Education),
    phrase("i am a student", &["i", "student"], PhraseCategory::Education),
    phrase("i go to school", &["i", "school", "go"], PhraseCategory::Education),
    phrase("teach me please", &["me", "teachme", "please"], PhraseCategory::Education),
    phrase("i am happy", &["i", "happy"], PhraseCategory::Emotion),
    phrase("i am sad", &["i", "sad"], PhraseCategory::Emotion),
    phrase("i am angry", &["i", "angry"], PhraseCategory::Emotion),
    phrase("i am afraid", &["i", "afraid"], PhraseCategory::Emotion),
    phrase("i love you", &["i", "you", "love"], PhraseCategory::Emotion),
];

/// (native-script word, English word, language).
pub const REGIONAL_MAPPINGS: &[(&str, &str, RegionalLanguage)] = &[
    ("வணக்கம்", "hello", RegionalLanguage::Tamil),
    ("நன்றி", "thankyou", RegionalLanguage::Tamil),
    ("வரவேற்பு", "welcome", RegionalLanguage::Tamil),
    ("ஆம்", "yes", RegionalLanguage::Tamil),
    ("இல்லை", "no", RegionalLanguage::Tamil),
    ("தயவு செய்து", "please", RegionalLanguage::Tamil),
    ("மன்னிக்கவும்", "sorry", RegionalLanguage::Tamil),
    ("வாருங்கள்", "come", RegionalLanguage::Tamil),
    ("போ", "go", RegionalLanguage::Tamil),
    ("சாப்பிடு", "eat", RegionalLanguage::Tamil),
    ("குடி", "drink", RegionalLanguage::Tamil),
    ("படி", "read", RegionalLanguage::Tamil),
    ("எழுது", "write", RegionalLanguage::Tamil),
    ("நல்ல", "good", RegionalLanguage::Tamil),
    ("கெட்ட", "bad", RegionalLanguage::Tamil),
    ("பெரிய", "big", RegionalLanguage::Tamil),
    ("சிறிய", "small", RegionalLanguage::Tamil),
    ("அழகான", "beautiful", RegionalLanguage::Tamil),
    ("தந்தை", "father", RegionalLanguage::Tamil),
    ("தாய்", "mother", RegionalLanguage::Tamil),
    ("மகன்", "boy", RegionalLanguage::Tamil),
    ("மகள்", "girl", RegionalLanguage::Tamil),
    ("ஆசிரியர்", "teacher", RegionalLanguage::Tamil),
    ("காலை", "morning", RegionalLanguage::Tamil),
    ("மதியம்", "afternoon", RegionalLanguage::Tamil),
    ("மாலை", "evening", RegionalLanguage::Tamil),
    ("இரவு", "night", RegionalLanguage::Tamil),
    ("இன்று", "today", RegionalLanguage::Tamil),
    ("நாளை", "tomorrow", RegionalLanguage::Tamil),
    ("நேற்று", "yesterday", RegionalLanguage::Tamil),
    ("नमस्ते", "hello", RegionalLanguage::Hindi),
    ("धन्यवाद", "thankyou", RegionalLanguage::Hindi),
    ("स्वागत", "welcome", RegionalLanguage::Hindi),
    ("हाँ", "yes", RegionalLanguage::Hindi),
    ("नहीं", "no", RegionalLanguage::Hindi),
    ("कृपया", "please", RegionalLanguage::Hindi),
    ("माफ़ करना", "sorry", RegionalLanguage::Hindi),
    ("आओ", "come", RegionalLanguage::Hindi),
    ("जाओ", "go", RegionalLanguage::Hindi),
    ("खाओ", "eat", RegionalLanguage::Hindi),
    ("पीओ", "drink", RegionalLanguage::Hindi),
    ("पढ़ो", "read", RegionalLanguage::Hindi),
    ("लिखो", "write", RegionalLanguage::Hindi),
    ("अच्छा", "good", RegionalLanguage::Hindi),
    ("बुरा", "bad", RegionalLanguage::Hindi),
    ("बड़ा", "big", RegionalLanguage::Hindi),
    ("छोटा", "small", RegionalLanguage::Hindi),
    ("सुंदर", "beautiful", RegionalLanguage::Hindi),
    ("पिता", "father", RegionalLanguage::Hindi),
    ("माता", "mother", RegionalLanguage::Hindi),
    ("लड़का", "boy", RegionalLanguage::Hindi),
    ("लड़की", "girl", RegionalLanguage::Hindi),
    ("शिक्षक", "teacher", RegionalLanguage::Hindi),
    ("सुबह", "morning", RegionalLanguage::Hindi),
    ("दोपहर", "afternoon", RegionalLanguage::Hindi),
    ("शाम", "evening", RegionalLanguage::Hindi),
    ("रात", "night", RegionalLanguage::Hindi),
    ("आज", "today", RegionalLanguage::Hindi),
    ("कल", "tomorrow", RegionalLanguage::Hindi),
    ("बीता हुआ कल", "yesterday", RegionalLanguage::Hindi),
];

/// Older single-word translation table, consulted after the regional one.
/// Also carries romanized spellings typed on a Latin keyboard.
pub const LEGACY_TRANSLATIONS: &[(&str, &str)] = &[
    ("வணக்கம்", "hello"),
    ("நன்றி", "thankyou"),
    ("வாருங்கள்", "come"),
    ("போ", "go"),
    ("ஆம்", "yes"),
    ("இல்லை", "no"),
    ("நல்ல", "good"),
    ("கெட்ட", "bad"),
    ("பெரிய", "big"),
    ("சிறிய", "small"),
    ("नमस्ते", "hello"),
    ("धन्यवाद", "thankyou"),
    ("आओ", "come"),
    ("जाओ", "go"),
    ("हाँ", "yes"),
    ("नहीं", "no"),
    ("अच्छा", "good"),
    ("बुरा", "bad"),
    ("बड़ा", "big"),
    ("छोटा", "small"),
    ("namaste", "hello"),
    ("dhanyavad", "thankyou"),
    ("shukriya", "thankyou"),
    ("vanakkam", "hello"),
    ("nandri", "thankyou"),
    ("haan", "yes"),
    ("nahi", "no"),
    ("illai", "no"),
    ("accha", "good"),
];

pub const SYNONYMS: &[(&str, &str)] = &[
    ("hi", "hello"),
    ("hey", "hello"),
    ("greetings", "hello"),
    ("howdy", "hello"),
    ("thanks", "thankyou"),
    ("thx", "thankyou"),
    ("grateful", "thankyou"),
    ("walking", "walk"),
    ("running", "run"),
    ("eating", "eat"),
    ("drinking", "drink"),
    ("reading", "read"),
    ("writing", "write"),
    ("sleeping", "sleep"),
    ("sitting", "sit"),
    ("standing", "stand"),
    ("whats", "what"),
    ("hows", "how"),
    ("wheres", "where"),
    ("whos", "who"),
    ("whys", "why"),
    ("glad", "happy"),
    ("joyful", "happy"),
    ("unhappy", "sad"),
    ("upset", "sad"),
    ("mad", "angry"),
    ("scared", "afraid"),
    ("frightened", "afraid"),
    ("a.m.", "morning"),
    ("p.m.", "afternoon"),
    ("evening", "afternoon"),
    ("im", "i"),
    ("youre", "you"),
    ("hes", "he"),
    ("shes", "she"),
    ("theyre", "they"),
    ("cant", "cannot"),
    ("wont", "will not"),
    ("dont", "do not"),
    ("doesnt", "does not"),
];

/// Gestures worth probing for ahead of the first playback.
pub const COMMON_GESTURES: &[&str] = &[
    "hello", "thankyou", "yes", "no", "please", "sorry", "good", "bad",
    "i", "you", "he", "she", "we", "they", "me", "my", "your",
    "what", "how", "where", "when", "why", "who", "which",
    "eat", "drink", "go", "come", "help", "need", "want", "like",
    "happy", "sad", "angry", "love", "name", "time", "today",
    "morning", "afternoon", "evening", "night",
    "father", "mother", "boy", "girl", "teacher", "student",
];
