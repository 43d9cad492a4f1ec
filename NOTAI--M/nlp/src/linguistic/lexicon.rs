//! Built-in word lists backing the tagger, chunker and segmenter.
//!
//! Everything here is lower-case unless noted. The tables are loaded once into
//! [`LinguisticResources`](super::resources::LinguisticResources).

/// English stop words (NLTK list).
pub(crate) const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Closed-class words with their Penn tag.
pub(crate) const CLOSED_CLASS: &[(&str, &str)] = &[
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"), ("these", "DT"),
    ("those", "DT"), ("every", "DT"), ("each", "DT"), ("some", "DT"), ("any", "DT"),
    ("no", "DT"), ("another", "DT"), ("all", "DT"), ("both", "DT"), ("either", "DT"),
    ("neither", "DT"), ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"),
    ("for", "IN"), ("with", "IN"), ("about", "IN"), ("against", "IN"), ("between", "IN"),
    ("into", "IN"), ("through", "IN"), ("during", "IN"), ("before", "IN"), ("after", "IN"),
    ("above", "IN"), ("below", "IN"), ("from", "IN"), ("under", "IN"), ("since", "IN"),
    ("because", "IN"), ("although", "IN"), ("though", "IN"), ("while", "IN"), ("if", "IN"),
    ("unless", "IN"), ("until", "IN"), ("than", "IN"), ("as", "IN"), ("like", "IN"),
    ("near", "IN"), ("among", "IN"), ("across", "IN"), ("around", "IN"), ("behind", "IN"),
    ("beyond", "IN"), ("despite", "IN"), ("toward", "IN"), ("towards", "IN"), ("upon", "IN"),
    ("within", "IN"), ("without", "IN"), ("whether", "IN"), ("via", "IN"), ("per", "IN"),
    ("onto", "IN"), ("throughout", "IN"), ("along", "IN"), ("beside", "IN"), ("besides", "IN"),
    ("inside", "IN"), ("outside", "IN"), ("except", "IN"), ("over", "IN"), ("up", "RP"),
    ("down", "RP"), ("out", "RP"), ("off", "RP"), ("to", "TO"), ("and", "CC"), ("but", "CC"),
    ("or", "CC"), ("nor", "CC"), ("plus", "CC"), ("yet", "CC"), ("i", "PRP"), ("me", "PRP"),
    ("you", "PRP"), ("he", "PRP"), ("him", "PRP"), ("she", "PRP"), ("it", "PRP"), ("we", "PRP"),
    ("us", "PRP"), ("they", "PRP"), ("them", "PRP"), ("myself", "PRP"), ("yourself", "PRP"),
    ("himself", "PRP"), ("herself", "PRP"), ("itself", "PRP"), ("ourselves", "PRP"),
    ("themselves", "PRP"), ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("her", "PRP$"),
    ("its", "PRP$"), ("our", "PRP$"), ("their", "PRP$"), ("who", "WP"), ("whom", "WP"),
    ("what", "WP"), ("whose", "WP$"), ("which", "WDT"), ("when", "WRB"), ("where", "WRB"),
    ("why", "WRB"), ("how", "WRB"), ("can", "MD"), ("could", "MD"), ("may", "MD"),
    ("might", "MD"), ("must", "MD"), ("shall", "MD"), ("should", "MD"), ("will", "MD"),
    ("would", "MD"), ("ca", "MD"), ("wo", "MD"), ("sha", "MD"), ("'ll", "MD"), ("'d", "MD"),
    ("not", "RB"), ("n't", "RB"), ("be", "VB"), ("am", "VBP"), ("is", "VBZ"), ("are", "VBP"),
    ("was", "VBD"), ("were", "VBD"), ("been", "VBN"), ("being", "VBG"), ("'re", "VBP"),
    ("'m", "VBP"), ("have", "VBP"), ("has", "VBZ"), ("had", "VBD"), ("having", "VBG"),
    ("'ve", "VBP"), ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"), ("done", "VBN"),
    ("doing", "VBG"), ("there", "RB"), ("one", "CD"), ("two", "CD"), ("three", "CD"),
    ("four", "CD"), ("five", "CD"), ("six", "CD"), ("seven", "CD"), ("eight", "CD"),
    ("nine", "CD"), ("ten", "CD"), ("eleven", "CD"), ("twelve", "CD"), ("twenty", "CD"),
    ("hundred", "CD"), ("thousand", "CD"), ("million", "CD"), ("billion", "CD"),
    ("more", "JJR"), ("less", "JJR"), ("better", "JJR"), ("worse", "JJR"), ("most", "JJS"),
    ("least", "JJS"), ("best", "JJS"), ("worst", "JJS"), ("oh", "UH"), ("yes", "UH"),
];

/// Forms of "be", used for negation placement and participle detection.
pub(crate) const BE_FORMS: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "'re", "'m",
];

/// Forms of "have" and "do" that act as auxiliaries.
pub(crate) const AUX_FORMS: &[&str] = &[
    "have", "has", "had", "having", "'ve", "do", "does", "did",
];

/// Adverbs that do not end in "-ly".
pub(crate) const ADVERBS: &[&str] = &[
    "very", "too", "also", "just", "only", "then", "now", "here", "often", "always", "never",
    "sometimes", "soon", "already", "still", "again", "even", "quite", "rather", "almost",
    "perhaps", "however", "therefore", "thus", "once", "ever", "together", "away", "later",
    "instead", "else", "enough", "far", "back", "so", "further", "hence", "indeed", "seldom",
    "twice", "abroad", "ahead", "afterwards", "meanwhile", "nearly", "otherwise", "well", "fast", "hard", "forward", "upward", "downward",
];

/// Adjectives that derivational suffixes do not catch.
pub(crate) const ADJECTIVES: &[&str] = &[
    "good", "bad", "new", "old", "great", "big", "small", "large", "little", "long", "short",
    "high", "low", "young", "important", "different", "early", "late", "easy", "strong", "weak",
    "hot", "cold", "warm", "cool", "bright", "dark", "red", "blue", "green", "yellow", "black",
    "white", "brown", "heavy", "full", "empty", "rich", "poor", "happy", "sad", "free", "true",
    "false", "real", "major", "main", "common", "simple", "complex", "first", "last", "next",
    "same", "whole", "certain", "clear", "deep", "wide", "huge", "tiny", "ancient", "modern",
    "famous", "human", "several", "many", "much", "few", "own", "other", "such", "likely",
    "daily", "only", "second", "third", "final", "key", "vast", "rare", "safe", "sure",
    "wild", "quick", "slow", "fresh", "dry", "wet", "solid", "liquid", "smart", "proud",
    "brave", "kind", "calm", "quiet", "loud", "soft", "sharp", "flat", "round", "thin", "thick",
    "elderly", "friendly", "lovely", "lonely", "ugly", "holy", "silly", "previous", "various",
    "average", "private", "separate", "accurate", "adequate", "appropriate", "complete",
    "correct", "direct", "distant", "efficient", "equal", "evident", "excellent", "frequent",
    "independent", "intelligent", "present", "recent", "relevant", "significant", "silent",
    "sufficient", "urgent", "violent", "absent", "ready", "busy", "heavy", "healthy", "wealthy",
    "wooden", "golden", "hidden", "broken", "open", "alive", "aware", "alone", "unknown",
];

/// Nouns that would otherwise be mistaken for adjectives, adverbs or verbs.
pub(crate) const NOUNS: &[&str] = &[
    "animal", "capital", "metal", "festival", "signal", "hospital", "journal", "crystal",
    "mineral", "material", "arrival", "proposal", "canal", "terminal", "principal", "rival",
    "individual", "original", "total", "interval", "ritual", "manual", "music", "logic",
    "topic", "republic", "clinic", "traffic", "fabric", "mechanic", "critic", "epic", "magic",
    "objective", "relative", "native", "detective", "executive", "representative",
    "alternative", "archive", "motive", "olive", "family", "supply", "ally", "assembly",
    "butterfly", "reply", "belly", "jelly", "rally", "anomaly", "monopoly", "thing", "morning",
    "evening", "king", "ring", "spring", "string", "ceiling", "nothing", "something",
    "anything", "everything", "water", "time", "world", "people", "energy", "light", "plant",
    "process", "result", "study", "work", "form", "change", "use", "part", "place", "power",
    "war", "state", "end", "book", "cell", "heat", "food", "sun", "moon", "earth", "element",
    "rule", "order", "name", "plan", "control", "design", "need", "structure", "cause",
    "report", "effect", "support", "experience", "move", "answer", "question", "note", "step",
    "method", "procedure", "way", "reason", "year", "week", "month", "day", "decade",
    "century", "hour", "minute", "night", "afternoon", "season", "radium", "oxygen", "carbon",
    "dioxide", "hydrogen", "nitrogen", "glucose", "chlorophyll", "photosynthesis", "mat",
    "cat", "dog", "prize", "discovery", "scientist", "physicist", "chemist", "theory",
    "relativity", "gravity", "planet", "star", "sunlight", "orbit", "engine", "battery",
    "team", "city", "country", "river", "mountain", "ocean", "island", "empire", "army",
    "president", "king", "queen", "language", "system", "computer", "program", "data",
    "physics", "chemistry", "biology", "mathematics", "history", "science", "medicine",
    "today", "yesterday", "tomorrow", "tonight", "seed", "speed", "weed", "greed",
];

/// Base forms of common verbs; inflections are derived by rule.
pub(crate) const VERB_BASES: &[&str] = &[
    "accept", "achieve", "add", "allow", "appear", "apply", "argue", "arrive", "ask", "attack",
    "attract", "avoid", "become", "begin", "believe", "belong", "boil", "borrow", "break",
    "breathe", "bring", "build", "burn", "buy", "call", "carry", "catch", "cause", "change",
    "choose", "claim", "climb", "close", "collect", "combine", "come", "compare", "complete",
    "connect", "conquer", "consider", "consist", "contain", "continue", "control", "convert",
    "cook", "cover", "create", "cross", "cut", "decide", "declare", "defeat", "define",
    "deliver", "depend", "describe", "design", "destroy", "determine", "develop", "die",
    "discover", "divide", "draw", "drink", "drive", "eat", "elect", "emit", "enable",
    "encourage", "end", "enjoy", "enter", "establish", "evaporate", "examine", "exist",
    "expand", "explain", "explore", "express", "fall", "feed", "feel", "fight", "fill", "find",
    "finish", "flow", "fly", "follow", "forget", "form", "found", "freeze", "gain", "get",
    "give", "go", "govern", "grow", "happen", "hate", "hear", "heat", "help", "hide", "hold",
    "hope", "identify", "improve", "include", "increase", "influence", "inspire", "introduce",
    "invade", "invent", "involve", "join", "keep", "kill", "know", "land", "lay",
    "lead", "learn", "leave", "let", "lie", "limit", "listen", "live", "look", "lose",
    "love", "make", "manage", "mean", "measure", "meet", "melt", "mix", "move", "need",
    "notice", "observe", "obtain", "occur", "offer", "open", "orbit", "organize", "paint",
    "pass", "pay", "perform", "plan", "plant", "play", "prefer", "prepare",
    "prevent", "print", "produce", "protect", "prove", "provide", "publish", "pull", "push",
    "put", "rain", "raise", "reach", "read", "receive", "record", "reduce", "refer",
    "reflect", "reign", "release", "remain", "remember", "remove", "repeat", "replace",
    "report", "represent", "require", "rest", "return", "rise", "rule", "run", "sail", "save",
    "say", "see", "seek", "seem", "sell", "send", "serve", "set", "settle", "shake", "share",
    "shine", "shoot", "show", "sign", "sing", "sink", "sit", "sleep", "smell", "solve",
    "speak", "spend", "spread", "stand", "start", "stay", "steal", "stop", "store", "strike",
    "study", "succeed", "suggest", "supply", "support", "survive", "swim", "take", "talk",
    "teach", "tell", "tend", "test", "think", "throw", "train", "transform", "travel", "treat",
    "try", "turn", "understand", "unite", "use", "vary", "visit", "wait", "wake", "walk",
    "want", "watch", "wear", "win", "wish", "wonder", "work", "worry", "write",
    "absorb", "mention",
];

/// Irregular verbs as (base, past, participle).
pub(crate) const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("become", "became", "become"), ("begin", "began", "begun"), ("bear", "bore", "born"),
    ("beat", "beat", "beaten"), ("bite", "bit", "bitten"), ("blow", "blew", "blown"),
    ("break", "broke", "broken"), ("bring", "brought", "brought"), ("build", "built", "built"),
    ("buy", "bought", "bought"), ("catch", "caught", "caught"), ("choose", "chose", "chosen"),
    ("come", "came", "come"), ("cut", "cut", "cut"), ("draw", "drew", "drawn"),
    ("drink", "drank", "drunk"), ("drive", "drove", "driven"), ("eat", "ate", "eaten"),
    ("fall", "fell", "fallen"), ("feed", "fed", "fed"), ("feel", "felt", "felt"),
    ("fight", "fought", "fought"), ("find", "found", "found"), ("fly", "flew", "flown"),
    ("forget", "forgot", "forgotten"), ("freeze", "froze", "frozen"), ("get", "got", "gotten"),
    ("give", "gave", "given"), ("go", "went", "gone"), ("grow", "grew", "grown"),
    ("hang", "hung", "hung"), ("have", "had", "had"), ("hear", "heard", "heard"),
    ("hide", "hid", "hidden"), ("hold", "held", "held"), ("keep", "kept", "kept"),
    ("know", "knew", "known"), ("lay", "laid", "laid"), ("lead", "led", "led"),
    ("leave", "left", "left"), ("let", "let", "let"), ("lie", "lay", "lain"),
    ("lose", "lost", "lost"), ("make", "made", "made"), ("mean", "meant", "meant"),
    ("meet", "met", "met"), ("pay", "paid", "paid"), ("put", "put", "put"),
    ("read", "read", "read"), ("ride", "rode", "ridden"), ("rise", "rose", "risen"),
    ("run", "ran", "run"), ("say", "said", "said"), ("see", "saw", "seen"),
    ("seek", "sought", "sought"), ("sell", "sold", "sold"), ("send", "sent", "sent"),
    ("set", "set", "set"), ("shake", "shook", "shaken"), ("shine", "shone", "shone"),
    ("shoot", "shot", "shot"), ("show", "showed", "shown"), ("sing", "sang", "sung"),
    ("sink", "sank", "sunk"), ("sit", "sat", "sat"), ("sleep", "slept", "slept"),
    ("speak", "spoke", "spoken"), ("spend", "spent", "spent"), ("spread", "spread", "spread"),
    ("stand", "stood", "stood"), ("steal", "stole", "stolen"), ("strike", "struck", "struck"),
    ("swim", "swam", "swum"), ("take", "took", "taken"), ("teach", "taught", "taught"),
    ("tell", "told", "told"), ("think", "thought", "thought"), ("throw", "threw", "thrown"),
    ("understand", "understood", "understood"), ("wake", "woke", "woken"),
    ("wear", "wore", "worn"), ("win", "won", "won"), ("write", "wrote", "written"),
    ("do", "did", "done"), ("be", "was", "been"),
];

/// Abbreviations that do not end a sentence.
pub(crate) const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "mt.", "vs.", "etc.", "e.g.",
    "i.e.", "u.s.", "u.k.", "u.n.", "a.m.", "p.m.", "no.", "fig.", "inc.", "ltd.", "co.",
    "corp.", "jan.", "feb.", "mar.", "apr.", "jun.", "jul.", "aug.", "sep.", "sept.", "oct.",
    "nov.", "dec.", "gen.", "col.", "capt.", "lt.", "gov.", "sen.", "rep.", "rev.", "approx.",
    "ca.", "c.", "cf.",
];

/// Titles that introduce a person's name.
pub(crate) const HONORIFICS: &[&str] = &[
    "mr", "mr.", "mrs", "mrs.", "ms", "ms.", "dr", "dr.", "prof", "prof.", "professor", "sir",
    "lady", "lord", "king", "queen", "prince", "princess", "president", "emperor", "empress",
    "general", "gen.", "captain", "capt.", "saint", "pope", "senator", "governor", "judge",
];

/// Common given names used to recognise people.
pub(crate) const GIVEN_NAMES: &[&str] = &[
    "marie", "pierre", "albert", "isaac", "charles", "george", "william", "james", "john",
    "mary", "elizabeth", "anne", "ann", "thomas", "robert", "michael", "david", "richard",
    "joseph", "edward", "henry", "alexander", "napoleon", "julius", "leonardo", "galileo",
    "nikola", "ada", "alan", "grace", "rosalind", "ernest", "niels", "max", "marie-curie",
    "louis", "johann", "ludwig", "wolfgang", "vincent", "pablo", "frida", "winston",
    "abraham", "benjamin", "franklin", "martin", "nelson", "mahatma", "jane", "emily", "sarah",
    "susan", "margaret", "catherine", "victoria", "alice", "emma", "olivia", "sophia", "anna",
    "maria", "peter", "paul", "mark", "luke", "matthew", "andrew", "daniel", "samuel",
    "steven", "stephen", "christopher", "francis", "frederick", "harry", "jack", "oliver",
    "amelia", "florence", "rachel", "rebecca", "hannah", "laura", "linda", "barbara",
    "patricia", "jennifer", "karen", "nancy", "lisa", "betty", "helen", "sandra", "donna",
    "carol", "ruth", "sharon", "michelle", "kevin", "brian", "gary", "timothy", "jose",
    "larry", "jeffrey", "frank", "scott", "eric", "raymond", "gregory", "joshua", "jerry",
    "dennis", "walter", "patrick", "harold", "douglas", "carl", "arthur", "roger", "keith",
    "jeremy", "terry", "lawrence", "sean", "christian", "austin", "jesse", "dylan", "bryan",
    "joe", "jordan", "billy", "bruce", "gabriel", "logan", "alan", "juan", "wayne", "roy",
    "ralph", "randy", "eugene", "vincent", "russell", "elijah", "louis", "bobby", "philip",
    "johnny", "genghis", "cleopatra", "aristotle", "plato", "socrates", "confucius",
];

/// Countries, cities and administrative regions (geo-political entities).
pub(crate) const PLACES: &[&str] = &[
    "paris", "london", "rome", "berlin", "madrid", "lisbon", "vienna", "prague", "warsaw",
    "moscow", "athens", "dublin", "amsterdam", "brussels", "stockholm", "oslo", "copenhagen",
    "helsinki", "tokyo", "beijing", "shanghai", "delhi", "new delhi", "mumbai", "cairo",
    "nairobi", "lagos", "johannesburg", "sydney", "melbourne", "toronto", "montreal",
    "vancouver", "mexico city", "new york", "los angeles", "chicago", "boston", "washington",
    "san francisco", "seattle", "miami", "houston", "dallas", "philadelphia", "atlanta",
    "france", "england", "britain", "great britain", "united kingdom", "germany", "italy",
    "spain", "portugal", "austria", "poland", "russia", "greece", "ireland", "netherlands",
    "belgium", "sweden", "norway", "denmark", "finland", "switzerland", "japan", "china",
    "india", "egypt", "kenya", "nigeria", "south africa", "australia", "canada", "mexico",
    "brazil", "argentina", "chile", "peru", "colombia", "united states", "america", "usa",
    "u.s.", "uk", "scotland", "wales", "turkey", "iran", "iraq", "israel", "pakistan",
    "korea", "vietnam", "thailand", "indonesia", "philippines", "ukraine", "california",
    "texas", "florida", "new jersey", "virginia", "ohio", "oregon", "alaska", "hawaii",
    "bavaria", "prussia", "babylon", "sparta", "carthage", "constantinople", "jerusalem",
    "venice", "florence", "naples", "milan", "geneva", "zurich", "hong kong", "singapore",
];

/// Continents, oceans and other non-political locations.
pub(crate) const REGIONS: &[&str] = &[
    "africa", "europe", "asia", "antarctica", "oceania", "north america", "south america",
    "sahara", "amazon", "himalayas", "alps", "andes", "rockies", "mediterranean", "pacific",
    "atlantic", "arctic", "siberia", "scandinavia", "balkans", "caribbean", "middle east",
    "nile", "thames", "danube", "everest", "mars", "venus", "jupiter", "saturn", "mercury",
];

/// Head words marking geographic features ("Amazon River", "Lake Victoria").
pub(crate) const LOCATION_FEATURES: &[&str] = &[
    "river", "mountain", "mountains", "mount", "mt.", "lake", "ocean", "sea", "desert",
    "valley", "island", "islands", "peninsula", "forest", "gulf", "bay", "canyon", "coast",
    "falls", "strait", "channel", "plateau", "plain", "plains", "glacier", "volcano",
];

/// Words marking organizations.
pub(crate) const ORG_MARKERS: &[&str] = &[
    "inc", "inc.", "corp", "corp.", "corporation", "company", "co.", "ltd", "ltd.",
    "university", "college", "institute", "association", "society", "agency", "bank", "party",
    "council", "committee", "organization", "organisation", "foundation", "ministry",
    "department", "academy", "school", "church", "club", "group", "union", "federation",
    "laboratory", "museum", "army", "navy", "parliament", "congress", "senate", "court",
    "commission", "institution", "nations",
];

/// Month names, including abbreviations.
pub(crate) const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan.", "feb.", "mar.", "apr.", "jun.", "jul.", "aug.",
    "sep.", "sept.", "oct.", "nov.", "dec.",
];

/// Day names.
pub(crate) const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

/// Currency words following an amount.
pub(crate) const CURRENCY_WORDS: &[&str] = &[
    "dollars", "dollar", "euros", "euro", "pounds", "cents", "yen", "rupees", "francs",
];

/// Hypernym to hyponym lists used to find sibling nouns.
pub(crate) const TAXONOMY: &[(&str, &[&str])] = &[
    ("metal", &["iron", "copper", "gold", "silver", "aluminum", "zinc", "lead", "tin", "nickel", "platinum"]),
    ("radioactive element", &["radium", "uranium", "polonium", "plutonium", "thorium"]),
    ("gas", &["oxygen", "hydrogen", "nitrogen", "helium", "neon", "argon", "methane"]),
    ("planet", &["mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune"]),
    ("star", &["sun", "sirius", "polaris", "betelgeuse"]),
    ("mammal", &["cat", "dog", "horse", "cow", "whale", "lion", "tiger", "elephant", "mouse", "bat"]),
    ("bird", &["eagle", "sparrow", "owl", "penguin", "parrot", "crow", "swan"]),
    ("fish", &["salmon", "trout", "shark", "tuna", "cod"]),
    ("insect", &["ant", "bee", "butterfly", "beetle", "mosquito"]),
    ("tree", &["oak", "pine", "maple", "birch", "willow", "palm"]),
    ("flower", &["rose", "tulip", "daisy", "lily", "orchid", "sunflower"]),
    ("fruit", &["apple", "banana", "orange", "grape", "pear", "mango", "cherry"]),
    ("vegetable", &["carrot", "potato", "onion", "cabbage", "pea", "tomato"]),
    ("organ", &["heart", "lung", "liver", "kidney", "brain", "stomach", "skin"]),
    ("organelle", &["nucleus", "mitochondria", "chloroplast", "ribosome", "vacuole"]),
    ("sugar", &["glucose", "fructose", "sucrose", "lactose"]),
    ("pigment", &["chlorophyll", "carotene", "melanin"]),
    ("energy", &["light", "heat", "sound", "electricity"]),
    ("vehicle", &["car", "bus", "truck", "bicycle", "train", "ship", "plane"]),
    ("furniture", &["table", "chair", "mat", "bed", "sofa", "desk", "shelf"]),
    ("instrument", &["piano", "violin", "guitar", "drum", "flute", "trumpet"]),
    ("color", &["red", "blue", "green", "yellow", "purple", "orange", "black", "white"]),
    ("scientist", &["physicist", "chemist", "biologist", "astronomer", "geologist"]),
    ("ruler", &["king", "queen", "emperor", "pharaoh", "sultan", "president"]),
    ("building", &["house", "castle", "temple", "church", "tower", "palace", "school"]),
    ("body of water", &["river", "lake", "ocean", "sea", "pond", "stream"]),
    ("landform", &["mountain", "valley", "hill", "island", "desert", "plain", "canyon"]),
    ("weather", &["rain", "snow", "wind", "storm", "fog", "hail"]),
    ("season", &["spring", "summer", "autumn", "winter"]),
    ("language", &["english", "french", "spanish", "latin", "german", "greek"]),
    ("award", &["prize", "medal", "trophy", "honor"]),
    ("document", &["book", "letter", "report", "note", "essay", "journal"]),
    ("sport", &["football", "tennis", "cricket", "basketball", "baseball", "golf"]),
    ("compound", &["water", "salt", "carbon dioxide", "ammonia", "glucose"]),
    ("particle", &["electron", "proton", "neutron", "photon", "atom"]),
    ("weapon", &["sword", "spear", "bow", "cannon", "rifle"]),
    ("food", &["bread", "rice", "cheese", "meat", "soup", "pasta"]),
    ("beverage", &["coffee", "tea", "milk", "juice", "wine"]),
];
