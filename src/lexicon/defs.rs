#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WordCategory {
    PositiveEmotion,
    NegativeEmotion,
    SocialReference,
    FirstPersonSingular,
    FirstPersonPlural,
    Assertive,
    Hedging,
    Excitement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseCategory {
    Hedge,
    Assertive,
}

#[derive(Debug, Clone, Copy)]
pub struct WordListDef {
    pub category: WordCategory,
    pub words: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct PhraseListDef {
    pub category: PhraseCategory,
    pub phrases: &'static [&'static str],
}

const POSITIVE_EMOTION: &[&str] = &[
    "adore", "affectionate", "alive", "amazing", "amusing", "awesome", "beam", "beaming",
    "beautiful", "blessed", "blissful", "bright", "brilliant", "care", "caring", "celebrate",
    "celebration", "cheerful", "cherish", "compassionate", "confident", "content", "cool",
    "delighted", "driven", "dynamic", "eager", "ecstatic", "elated", "encouraged", "energetic",
    "energized", "enjoy", "enjoyable", "enjoying", "entertaining", "enthusiastic", "euphoric",
    "excellent", "excited", "excitement", "exciting", "fantastic", "fond", "fortunate",
    "fulfilled", "fun", "funny", "generous", "gentle", "giggle", "glad", "glorious", "good",
    "gorgeous", "grateful", "great", "grin", "happiness", "happy", "hilarious", "hopeful",
    "humor", "humorous", "hyped", "incredible", "inspired", "joy", "joyful", "kind", "laugh",
    "laughing", "laughter", "love", "loved", "lovely", "loving", "lucky", "magnificent",
    "marvelous", "merry", "motivated", "neat", "nice", "optimistic", "outstanding", "overjoyed",
    "party", "passionate", "perfect", "phenomenal", "playful", "pleased", "positive",
    "promising", "proud", "pumped", "rad", "satisfied", "sick", "smile", "smiling",
    "spectacular", "stoked", "superb", "sweet", "tender", "terrific", "thankful", "thrilled",
    "treasure", "upbeat", "vibrant", "warm", "warmth", "wit", "witty", "wonderful",
];

const NEGATIVE_EMOTION: &[&str] = &[
    "afraid", "aggravated", "alone", "anger", "angry", "annoyed", "anxiety", "anxious",
    "apprehensive", "ashamed", "awful", "bitter", "bleak", "bored", "boring", "bothered",
    "cynical", "dejected", "depressed", "depressing", "desolate", "despair", "despise",
    "detest", "disappointed", "disappointing", "disappointment", "disgusted", "disgusting",
    "disheartened", "disturbed", "doubtful", "downcast", "drained", "dread", "dreadful",
    "dreading", "dull", "embarrassed", "enraged", "exhausted", "fatigued", "fearful",
    "frustrated", "frustrating", "frustration", "furious", "gloomy", "grief", "grieving",
    "guilty", "hate", "hated", "hatred", "heartbroken", "helpless", "hopeless", "horrible",
    "hostile", "insecure", "irritated", "isolated", "livid", "loathe", "loneliness", "lonely",
    "mad", "melancholy", "miserable", "monotonous", "mourning", "nervous", "outraged",
    "overwhelmed", "panicked", "pessimistic", "regret", "regretful", "repulsed", "resentful",
    "sad", "sadness", "scared", "somber", "sorrowful", "stress", "stressed", "stressful",
    "tedious", "tense", "terrible", "terrified", "tired", "troubled", "uneasy", "unhappy",
    "weary", "worried", "worry",
];

const SOCIAL_REFERENCE: &[&str] = &[
    "acquaintance", "anyone", "audience", "barbecue", "boyfriend", "brother", "brunch",
    "buddies", "buddy", "chat", "chatting", "children", "classmate", "classmates", "club",
    "clubbing", "clubs", "colleague", "colleagues", "communities", "community", "companion",
    "companions", "company", "concert", "connect", "connecting", "conversation",
    "conversations", "coworker", "coworkers", "crowd", "dad", "dancing", "daughter", "dinner",
    "discuss", "discussing", "drinks", "event", "events", "everybody", "everyone", "family",
    "father", "festival", "friend", "friends", "friendship", "game", "games", "gathering",
    "gatherings", "girlfriend", "group", "groups", "hang", "hanging", "hangout", "host",
    "hosted", "hosting", "husband", "invite", "invited", "join", "joined", "kids", "lunch",
    "mate", "mates", "meet", "meeting", "meetup", "met", "mingle", "mingling", "mom", "mother",
    "neighbor", "neighbors", "neighbour", "neighbours", "nobody", "organization", "outing",
    "pal", "pals", "parents", "parties", "partner", "party", "people", "person", "public",
    "reunion", "roommate", "roommates", "share", "shared", "sharing", "sister", "socialize",
    "socializing", "society", "somebody", "someone", "son", "spouse", "talk", "talked",
    "talking", "team", "teams", "together", "visit", "visited", "visiting", "wife",
];

const FIRST_PERSON_SINGULAR: &[&str] = &[
    "i", "i'd", "i'll", "i'm", "i've", "me", "mine", "my", "myself",
];

const FIRST_PERSON_PLURAL: &[&str] = &[
    "our", "ours", "ourselves", "us", "we", "we'd", "we'll", "we're", "we've",
];

const ASSERTIVE_WORDS: &[&str] = &[
    "absolutely", "accomplish", "accomplished", "accountable", "achieve", "achieved",
    "achievement", "always", "assert", "believe", "bold", "brave", "capable", "certain",
    "certainly", "charge", "clearly", "command", "competent", "confidence", "confident",
    "convinced", "courageous", "decide", "decided", "declare", "definitely", "demand",
    "determined", "direct", "directed", "excel", "excelled", "fearless", "indeed", "initiative",
    "insist", "know", "lead", "leader", "leading", "manage", "managed", "must", "never",
    "obviously", "organize", "organized", "powerful", "require", "responsibility",
    "responsible", "shall", "skilled", "state", "strong", "successful", "sure", "surely",
    "triumph", "undeniably", "undoubtedly", "unquestionably", "victory", "will", "win", "won",
];

const HEDGING_WORDS: &[&str] = &[
    "actually", "almost", "appear", "appeared", "appears", "approximately", "barely",
    "basically", "careful", "cautious", "could", "doubtful", "fairly", "guess", "hardly",
    "hesitant", "honestly", "kinda", "likely", "literally", "maybe", "might", "nearly",
    "occasionally", "perhaps", "possibly", "probably", "quite", "rarely", "rather", "reluctant",
    "sceptical", "seem", "seemed", "seems", "seldom", "skeptical", "slightly", "sometimes",
    "somewhat", "sorta", "suppose", "tend", "tended", "tends", "tentative", "uncertain",
    "unlikely", "unsure", "wary", "wonder",
];

const EXCITEMENT_WORDS: &[&str] = &[
    "adrenaline", "adventure", "adventurous", "bold", "challenge", "challenging", "compete",
    "competition", "competitive", "dare", "daring", "different", "discover", "discovery",
    "excitement", "exciting", "exhilarating", "exploration", "explore", "exploring", "extreme",
    "fast", "impulse", "impulsive", "intense", "intensity", "journey", "new", "novel",
    "novelty", "racing", "risk", "risky", "rush", "speed", "spontaneity", "spontaneous",
    "thrill", "thrilling", "travel", "traveling", "travelling", "trip", "unique", "unusual",
    "wild",
];

const HEDGE_PHRASES: &[&str] = &[
    "kind of",
    "sort of",
    "a little",
    "a bit",
    "i guess",
    "i think",
    "i suppose",
    "i wonder",
    "not sure",
    "not certain",
    "don't know",
    "don't really",
    "to be honest",
    "i mean",
    "you know",
    "more or less",
    "in a way",
    "so to speak",
];

const ASSERTIVE_PHRASES: &[&str] = &[
    "i know",
    "i believe",
    "without a doubt",
    "no question",
    "for sure",
    "of course",
    "no doubt",
    "make sure",
    "take charge",
    "step up",
    "speak up",
    "stand up",
    "right away",
    "let's go",
    "let's do",
];

const BUILTIN_WORD_LISTS: &[WordListDef] = &[
    WordListDef {
        category: WordCategory::PositiveEmotion,
        words: POSITIVE_EMOTION,
    },
    WordListDef {
        category: WordCategory::NegativeEmotion,
        words: NEGATIVE_EMOTION,
    },
    WordListDef {
        category: WordCategory::SocialReference,
        words: SOCIAL_REFERENCE,
    },
    WordListDef {
        category: WordCategory::FirstPersonSingular,
        words: FIRST_PERSON_SINGULAR,
    },
    WordListDef {
        category: WordCategory::FirstPersonPlural,
        words: FIRST_PERSON_PLURAL,
    },
    WordListDef {
        category: WordCategory::Assertive,
        words: ASSERTIVE_WORDS,
    },
    WordListDef {
        category: WordCategory::Hedging,
        words: HEDGING_WORDS,
    },
    WordListDef {
        category: WordCategory::Excitement,
        words: EXCITEMENT_WORDS,
    },
];

const BUILTIN_PHRASE_LISTS: &[PhraseListDef] = &[
    PhraseListDef {
        category: PhraseCategory::Hedge,
        phrases: HEDGE_PHRASES,
    },
    PhraseListDef {
        category: PhraseCategory::Assertive,
        phrases: ASSERTIVE_PHRASES,
    },
];

pub fn builtin_word_lists() -> &'static [WordListDef] {
    BUILTIN_WORD_LISTS
}

pub fn builtin_phrase_lists() -> &'static [PhraseListDef] {
    BUILTIN_PHRASE_LISTS
}
