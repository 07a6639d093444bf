//! 静态统计表：全部只读，编译期确定。

/// 空输入时的起始字母及权重。
pub const SEED_LETTERS: &[(char, f32)] = &[
    ('T', 0.20),
    ('A', 0.18),
    ('I', 0.16),
    ('S', 0.14),
    ('O', 0.12),
];

/// 前一个词不在转移表里时，按全语料词首字母频率给出。
pub const WORD_START_LETTERS: &[(char, f32)] = &[
    ('T', 0.16),
    ('A', 0.12),
    ('I', 0.10),
    ('W', 0.09),
    ('S', 0.08),
    ('O', 0.07),
];

/// 词中没有任何来源命中时的兜底（英文最常见字母）。
pub const FALLBACK_LETTERS: &[(char, f32)] = &[
    ('E', 0.20),
    ('T', 0.18),
    ('A', 0.16),
    ('O', 0.14),
    ('I', 0.12),
];

/// 常用词表，按频次降序；同一个词重复出现时以第一次出现的位置为准。
pub const COMMON_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when",
    "make", "can", "like", "time", "no", "just", "him", "know", "take", "people", "into",
    "year", "your", "good", "some", "could", "them", "see", "other", "than", "then", "now",
    "look", "only", "come", "its", "over", "think", "also", "back", "after", "use", "two",
    "how", "our", "work", "first", "well", "way", "even", "new", "want", "because", "any",
    "these", "give", "day", "most", "us", "is", "are", "was", "were", "been", "being", "has",
    "had", "having", "does", "did", "doing", "should", "may", "might", "must", "shall",
    "cannot", "used", "more", "very", "what", "know", "just", "first", "also", "after", "back",
    "other", "many", "such", "much", "where", "most", "make", "way", "well", "may", "say",
    "each", "which", "their", "time", "will", "about", "if", "up", "out", "many", "then",
    "them", "these", "so", "some", "her", "would", "make", "like", "into", "him", "has", "two",
    "more", "write", "go", "see", "number", "no", "way", "could", "people", "my", "than",
    "first", "water", "been", "call", "who", "oil", "its", "now", "find", "long", "down",
    "day", "did", "get", "come", "made", "may", "part", "over", "new", "sound", "take", "only",
    "little", "work", "know", "place", "year", "live", "me", "back", "give", "most", "very",
    "after", "thing", "our", "just", "name", "good", "sentence", "man", "think", "say",
    "great", "where", "help", "through", "much", "before", "line", "right", "too", "mean",
    "old", "any", "same", "tell", "boy", "follow", "came", "want", "show", "also", "around",
    "form", "three", "small", "set", "put", "end", "does", "another", "well", "large", "must",
    "big", "even", "such", "because", "turn", "here", "why", "ask", "went", "men", "read",
    "need", "land", "different", "home", "us", "move", "try", "kind", "hand", "picture",
    "again", "change", "off", "play", "spell", "air", "away", "animal", "house", "point",
    "page", "letter", "mother", "answer", "found", "study", "still", "learn", "should",
    "America", "world", "high", "every", "near", "add", "food", "between", "own", "below",
    "country", "plant", "last", "school", "father", "keep", "tree", "never", "start", "city",
    "earth", "eye", "light", "thought", "head", "under", "story", "saw", "left", "don't",
    "few", "while", "along", "might", "close", "something", "seem", "next", "hard", "open",
    "example", "begin", "life", "always", "those", "both", "paper", "together", "got", "group",
    "often", "run", "important", "until", "children", "side", "feet", "car", "mile", "night",
    "walk", "white", "sea", "began", "grow", "took", "river", "four", "carry", "state", "once",
    "book", "hear", "stop", "without", "second", "later", "miss", "idea", "enough", "eat",
    "face", "watch", "far", "Indian", "really", "almost", "let", "above", "girl", "sometimes",
    "mountain", "cut", "young", "talk", "soon", "list", "song", "leave", "family", "it's",
    "body", "music", "color", "stand", "sun", "questions", "fish", "area", "mark", "dog",
    "horse", "birds", "problem", "complete", "room", "knew", "since", "ever", "piece", "told",
    "usually", "didn't", "friends", "easy", "heard", "order", "red", "door", "sure", "become",
    "top", "ship", "across", "today", "during", "short", "better", "best", "however", "low",
    "hours", "black", "products", "happened", "whole", "measure", "remember", "early", "waves",
    "reached", "listen", "wind", "rock", "space", "covered", "fast", "several", "hold",
    "himself", "toward", "five", "step", "morning", "passed", "vowel", "true", "hundred",
    "against", "pattern", "numeral", "table", "north", "slowly", "money", "map", "farm",
    "pulled", "draw", "voice", "seen", "cold", "cried", "plan", "notice", "south", "sing",
    "war", "ground", "fall", "king", "town", "I'll", "unit", "figure", "certain", "field",
    "travel", "wood", "fire", "upon", "done", "English", "road", "half", "ten", "fly", "gave",
    "box", "finally", "wait", "correct", "oh", "quickly", "person", "became", "shown",
    "minutes", "strong", "verb", "stars", "front", "feel", "fact", "inches", "street",
    "decided", "contain", "course", "surface", "produce", "building", "ocean", "class", "note",
    "nothing", "rest", "carefully", "scientists", "inside", "wheels", "stay", "green", "known",
    "island", "week", "less", "machine", "base", "ago", "stood", "plane", "system", "behind",
    "ran", "round", "boat", "game", "force", "brought", "understand", "warm", "common",
    "bring", "explain", "dry", "though", "language", "shape", "deep", "thousands", "yes",
    "clear", "equation", "yet", "government", "filled", "heat", "full", "hot", "check",
    "object", "am", "rule", "among", "noun", "power", "cannot", "able", "six", "size", "dark",
    "ball", "material", "special", "heavy", "fine", "pair", "circle", "include", "built",
    "can't", "matter", "square", "syllables", "perhaps", "bill", "felt", "suddenly", "test",
    "direction", "center", "farmers", "ready", "anything", "divided", "general", "energy",
    "subject", "Europe", "moon", "region", "return", "believe", "dance", "members", "picked",
    "simple", "cells", "paint", "mind", "love", "cause", "rain", "exercise", "eggs", "train",
    "blue", "wish", "drop", "developed", "window", "difference", "distance", "heart", "sit",
    "sum", "summer", "wall", "forest", "probably", "legs", "sat", "main", "winter", "wide",
    "written", "length", "reason", "kept", "interest", "arms", "brother", "race", "present",
    "beautiful", "store", "job", "edge", "past", "sign", "record", "finished", "discovered",
    "wild", "happy", "beside", "gone", "sky", "glass", "million", "west", "lay", "weather",
    "root", "instruments", "meet", "third", "months", "paragraph", "raised", "represent",
    "soft", "whether", "clothes", "flowers", "shall", "teacher", "held", "describe", "drive",
    "cross", "speak", "solve", "appear", "metal", "son", "either", "ice", "sleep", "village",
    "factors", "result", "jumped", "snow", "ride", "care", "floor", "hill", "pushed", "baby",
    "buy", "century", "outside", "everything", "tall", "already", "instead", "phrase", "soil",
    "bed", "copy", "free", "hope", "spring", "case", "laughed", "nation", "quite", "type",
    "themselves", "temperature", "bright", "lead", "everyone", "method", "section", "lake",
    "consonant", "within", "dictionary", "hair", "age", "amount", "scale", "pounds",
    "although", "per", "broken", "moment", "tiny", "possible", "gold", "milk", "quiet",
    "natural", "lot", "stone", "act", "build", "middle", "speed", "count", "cat", "someone",
    "sail", "rolled", "bear", "wonder", "smiled", "angle", "fraction", "Africa", "killed",
    "melody", "bottom", "trip", "hole", "poor", "let's", "fight", "surprise", "French", "died",
    "beat", "exactly", "remain", "dress", "iron", "couldn't", "fingers", "row", "least",
    "catch", "climbed", "wrote", "shouted", "continued", "itself", "else", "plains", "gas",
    "England", "burning", "design", "joined", "foot", "law", "ears", "grass", "you're", "grew",
    "skin", "valley", "cents", "key", "president", "brown", "trouble", "cool", "cloud", "lost",
    "sent", "symbols", "wear", "bad", "save", "experiment", "engine", "alone", "drawing",
    "east", "pay", "single", "touch", "information", "express", "mouth", "yard", "equal",
    "decimal", "yourself", "control", "practice", "report", "straight", "rise", "statement",
    "stick", "party", "seeds", "suppose", "woman", "coast", "bank", "period", "wire", "choose",
    "clean", "visit", "bit", "whose", "received", "garden", "please", "strange", "caught",
    "fell", "team", "God", "captain", "direct", "ring", "serve", "child", "desert", "increase",
    "history", "cost", "maybe", "business", "separate", "break", "uncle", "hunting", "flow",
    "lady", "students", "human", "art", "feeling", "supply", "corner", "electric", "insects",
    "crops", "tone", "hit", "sand", "doctor", "provide", "thus", "won't", "cook", "bones",
    "tail", "board", "modern", "compound", "mine", "wasn't", "fit", "addition", "belong",
    "safe", "soldiers", "guess", "silent", "trade", "rather", "compare", "crowd", "poem",
    "enjoy", "elements", "indicate", "except", "expect", "flat", "seven", "interesting",
    "sense", "string", "blow", "famous", "value", "wings", "movement", "pole", "excellent",
    "stream", "knowledge", "fit", "pound", "though", "practice", "separate", "difficult",
    "doctor", "please", "protect", "noon", "whose", "locate", "ring", "character", "insect",
    "caught", "period", "indicate", "radio", "spoke", "atom", "human", "history", "effect",
    "electric", "expect", "crop", "modern", "element", "hit", "student", "corner", "party",
    "supply", "bone", "rail", "imagine", "provide", "agree", "thus", "capital", "won't",
    "chair", "danger", "fruit", "rich", "thick", "soldier", "process", "operate", "guess",
    "necessary", "sharp", "wing", "create", "neighbor", "wash", "bat", "rather", "crowd",
    "corn", "compare", "poem", "string", "bell", "depend", "meat", "rub", "tube", "famous",
    "dollar", "stream", "fear", "sight", "thin", "triangle", "planet", "hurry", "chief",
    "colony", "clock", "mine", "tie", "enter", "major", "fresh", "search", "send", "yellow",
    "gun", "allow", "print", "dead", "spot", "desert", "suit", "current", "lift", "rose",
    "continue", "block", "chart", "hat", "sell", "success", "company", "subtract", "event",
    "particular", "deal", "swim", "term", "opposite", "wife", "shoe", "shoulder", "spread",
    "arrange", "camp", "invent", "cotton", "born", "determine", "quart", "nine", "truck",
    "noise", "level", "chance", "gather", "shop", "stretch", "throw", "shine", "property",
    "column", "molecule", "select", "wrong", "gray", "repeat", "require", "broad", "prepare",
    "salt", "nose", "plural", "anger", "claim", "continent", "oxygen", "sugar", "death",
    "pretty", "skill", "women", "season", "solution", "magnet", "silver", "thank", "branch",
    "match", "suffix", "especially", "fig", "afraid", "huge", "sister", "steel", "discuss",
    "forward", "similar", "guide", "experience", "score", "apple", "bought", "led", "pitch",
    "coat", "mass", "card", "band", "rope", "slip", "win", "dream", "evening", "condition",
    "feed", "tool", "total", "basic", "smell", "valley", "nor", "double", "seat", "arrive",
    "master", "track", "parent", "shore", "division", "sheet", "substance", "favor", "connect",
    "post", "spend", "chord", "fat", "glad", "original", "share", "station", "dad", "bread",
    "charge", "proper", "bar", "offer", "segment", "slave", "duck", "instant", "market",
    "degree", "populate", "chick", "dear", "enemy", "reply", "drink", "occur", "support",
    "speech", "nature", "range", "steam", "motion", "path", "liquid", "log", "meant",
    "quotient", "teeth", "shell", "neck",
];

/// 词 -> 常见后继词（按可能性降序）。
pub const WORD_TRANSITIONS: &[(&str, &[&str])] = &[
    ("the", &["quick", "best", "most", "first", "second", "only", "same", "other", "next", "new"]),
    ("quick", &["brown", "and", "response", "way", "answer", "fix", "solution"]),
    ("brown", &["fox", "bear", "dog", "eyes", "hair", "color"]),
    ("fox", &["jumps", "runs", "is", "and", "was"]),
    ("jumps", &["over", "on", "to", "up", "down", "into", "off"]),
    ("over", &["the", "to", "there", "here", "and", "again", "time"]),
    ("lazy", &["dog", "person", "day", "weekend", "afternoon", "cat"]),
    ("dog", &["is", "was", "barks", "runs", "eats", "sleeps", "plays", "loves"]),
    ("i", &["am", "was", "have", "had", "will", "can", "would", "think", "know", "love"]),
    ("am", &["a", "not", "here", "going", "happy", "glad", "sorry", "sure"]),
    ("is", &["a", "not", "the", "it", "this", "that", "very", "so", "good"]),
    ("are", &["you", "we", "they", "not", "the", "a", "very", "so"]),
    ("you", &["are", "can", "have", "will", "know", "see", "want", "need"]),
    ("can", &["be", "see", "do", "make", "help", "you", "i", "we"]),
    ("have", &["a", "to", "been", "you", "no", "some", "any", "more"]),
    ("will", &["be", "not", "have", "you", "i", "we", "they"]),
    ("would", &["be", "like", "have", "you", "not", "it"]),
    ("should", &["be", "not", "have", "you", "i", "we"]),
    ("this", &["is", "was", "will", "can", "could", "has", "looks"]),
    ("that", &["is", "was", "will", "would", "looks", "seems"]),
    ("to", &["be", "the", "do", "make", "see", "get", "have", "go", "use"]),
    ("of", &["the", "a", "course", "all", "them", "us", "it"]),
    ("in", &["the", "a", "order", "this", "that", "my", "our"]),
    ("for", &["the", "a", "you", "me", "them", "us", "this"]),
    ("on", &["the", "a", "this", "that", "it", "top"]),
    ("with", &["the", "a", "you", "me", "them", "us", "this"]),
    ("at", &["the", "a", "this", "that", "least", "most"]),
    ("and", &["the", "then", "i", "a", "it", "we", "so", "that"]),
    ("it", &["is", "was", "will", "would", "can", "has", "to"]),
    ("we", &["are", "can", "will", "have", "need", "should", "were"]),
    ("they", &["are", "were", "have", "will", "can", "said", "do"]),
    ("my", &["name", "own", "friend", "mother", "father", "life", "home"]),
    ("a", &["lot", "new", "few", "good", "little", "great", "long", "small"]),
];

/// 两字母上下文 -> 下一个字符的概率（包含表示词尾的空格）。
pub const TRIGRAMS: &[(&str, &[(char, f32)])] = &[
    ("TH", &[('E', 0.85), ('I', 0.05), ('A', 0.04), ('O', 0.03), ('R', 0.02)]),
    ("HE", &[('R', 0.30), ('N', 0.20), (' ', 0.15), ('Y', 0.10), ('A', 0.10), ('L', 0.08), ('I', 0.05), ('S', 0.02)]),
    ("IN", &[('G', 0.40), ('E', 0.20), ('T', 0.15), (' ', 0.10), ('D', 0.08), ('K', 0.05), ('S', 0.02)]),
    ("ER", &[('E', 0.20), ('S', 0.18), (' ', 0.15), ('Y', 0.12), ('I', 0.10), ('A', 0.08), ('N', 0.08), ('T', 0.05), ('R', 0.04)]),
    ("AN", &[('D', 0.30), ('T', 0.20), ('Y', 0.15), ('G', 0.10), ('C', 0.08), (' ', 0.08), ('S', 0.05), ('K', 0.04)]),
    ("RE", &[('D', 0.15), ('A', 0.15), ('S', 0.15), (' ', 0.12), ('N', 0.10), ('E', 0.10), ('M', 0.08), ('L', 0.08), ('T', 0.05), ('C', 0.02)]),
    ("ED", &[(' ', 0.70), ('I', 0.10), ('N', 0.05), ('U', 0.05), ('A', 0.05), ('W', 0.03), ('S', 0.02)]),
    ("ON", &[('E', 0.20), (' ', 0.18), ('G', 0.15), ('S', 0.12), ('T', 0.10), ('A', 0.08), ('C', 0.05), ('D', 0.05), ('I', 0.05), ('L', 0.02)]),
    ("ND", &[(' ', 0.50), ('E', 0.15), ('I', 0.10), ('A', 0.08), ('S', 0.07), ('O', 0.05), ('R', 0.03), ('L', 0.02)]),
    ("HA", &[('T', 0.30), ('V', 0.20), ('N', 0.15), ('D', 0.10), ('S', 0.10), ('L', 0.08), ('R', 0.05), ('P', 0.02)]),
    ("SH", &[('O', 0.30), ('E', 0.25), ('I', 0.15), ('A', 0.12), (' ', 0.10), ('U', 0.05), ('Y', 0.02), ('T', 0.01)]),
    ("HO", &[('U', 0.35), ('W', 0.20), ('P', 0.15), ('M', 0.10), ('T', 0.08), ('R', 0.07), ('N', 0.03), ('L', 0.02)]),
    ("EN", &[('T', 0.25), ('D', 0.20), (' ', 0.15), ('C', 0.12), ('G', 0.10), ('S', 0.08), ('E', 0.05), ('A', 0.03), ('I', 0.02)]),
    ("AT", &[('E', 0.25), ('I', 0.20), (' ', 0.18), ('H', 0.12), ('T', 0.10), ('O', 0.08), ('S', 0.05), ('C', 0.02)]),
    ("OR", &[('E', 0.25), ('Y', 0.20), (' ', 0.15), ('D', 0.12), ('K', 0.10), ('M', 0.08), ('T', 0.05), ('I', 0.03), ('S', 0.02)]),
    ("TE", &[('D', 0.25), ('R', 0.20), (' ', 0.15), ('N', 0.12), ('M', 0.10), ('S', 0.08), ('A', 0.05), ('L', 0.03), ('X', 0.02)]),
    ("IS", &[(' ', 0.40), ('T', 0.20), ('E', 0.15), ('H', 0.10), ('S', 0.08), ('I', 0.05), ('O', 0.02)]),
    ("IT", &[(' ', 0.35), ('H', 0.20), ('Y', 0.15), ('I', 0.10), ('E', 0.08), ('S', 0.07), ('T', 0.03), ('A', 0.02)]),
    ("AR", &[('E', 0.30), ('Y', 0.20), ('T', 0.15), ('D', 0.12), (' ', 0.10), ('K', 0.05), ('I', 0.05), ('S', 0.03)]),
    ("OU", &[('T', 0.30), ('R', 0.20), ('L', 0.15), ('N', 0.12), ('G', 0.10), ('S', 0.08), ('P', 0.03), ('D', 0.02)]),
    ("AL", &[('L', 0.40), (' ', 0.20), ('E', 0.15), ('I', 0.10), ('S', 0.08), ('K', 0.05), ('T', 0.02)]),
    ("LE", &[(' ', 0.30), ('D', 0.20), ('S', 0.15), ('R', 0.12), ('A', 0.10), ('T', 0.08), ('N', 0.03), ('C', 0.02)]),
    ("SE", &[(' ', 0.30), ('S', 0.20), ('D', 0.15), ('R', 0.12), ('N', 0.10), ('L', 0.08), ('E', 0.03), ('A', 0.02)]),
    ("IO", &[('N', 0.90), ('U', 0.05), ('S', 0.03), ('R', 0.02)]),
    ("ST", &[(' ', 0.25), ('E', 0.20), ('A', 0.15), ('R', 0.12), ('O', 0.10), ('I', 0.08), ('U', 0.05), ('H', 0.03), ('Y', 0.02)]),
    ("TO", &[(' ', 0.40), ('N', 0.15), ('R', 0.12), ('P', 0.10), ('W', 0.08), ('O', 0.07), ('M', 0.05), ('T', 0.02), ('L', 0.01)]),
    ("NT", &[(' ', 0.35), ('E', 0.20), ('I', 0.15), ('S', 0.12), ('A', 0.08), ('R', 0.05), ('O', 0.03), ('H', 0.02)]),
    ("NG", &[(' ', 0.50), ('E', 0.15), ('S', 0.12), ('L', 0.10), ('T', 0.08), ('I', 0.03), ('A', 0.02)]),
    ("VE", &[(' ', 0.35), ('R', 0.30), ('D', 0.15), ('N', 0.10), ('S', 0.08), ('L', 0.02)]),
    ("CO", &[('N', 0.30), ('M', 0.25), ('U', 0.15), ('L', 0.10), ('R', 0.08), ('V', 0.07), ('O', 0.03), ('S', 0.02)]),
    ("LY", &[(' ', 0.95), ('I', 0.03), ('N', 0.02)]),
    ("DE", &[(' ', 0.25), ('R', 0.20), ('D', 0.15), ('N', 0.12), ('S', 0.10), ('A', 0.08), ('T', 0.05), ('C', 0.03), ('L', 0.02)]),
    ("RA", &[('N', 0.25), ('T', 0.20), ('L', 0.15), ('I', 0.12), ('C', 0.10), ('D', 0.08), ('M', 0.05), ('Y', 0.03), ('G', 0.02)]),
    ("ME", &[(' ', 0.30), ('N', 0.25), ('R', 0.15), ('S', 0.12), ('D', 0.08), ('A', 0.05), ('T', 0.03), ('L', 0.02)]),
    ("RI", &[('N', 0.25), ('T', 0.20), ('C', 0.15), ('G', 0.12), ('S', 0.10), ('E', 0.08), ('A', 0.05), ('O', 0.03), ('D', 0.02)]),
    ("IC", &[('E', 0.25), ('A', 0.20), ('H', 0.15), ('K', 0.12), (' ', 0.10), ('T', 0.08), ('I', 0.05), ('S', 0.03), ('O', 0.02)]),
    ("WH", &[('A', 0.30), ('O', 0.25), ('E', 0.20), ('I', 0.15), ('Y', 0.08), ('R', 0.02)]),
    ("WA", &[('S', 0.30), ('T', 0.25), ('N', 0.15), ('Y', 0.12), ('R', 0.08), ('L', 0.05), ('K', 0.03), ('I', 0.02)]),
    ("CH", &[('E', 0.30), ('A', 0.20), ('I', 0.15), ('O', 0.12), (' ', 0.10), ('R', 0.08), ('T', 0.03), ('U', 0.02)]),
    ("TI", &[('O', 0.40), ('N', 0.20), ('M', 0.15), ('C', 0.10), ('V', 0.08), ('E', 0.05), ('T', 0.02)]),
    ("PH", &[('O', 0.40), ('Y', 0.25), ('E', 0.15), ('A', 0.10), ('I', 0.08), ('R', 0.02)]),
    ("GH", &[('T', 0.60), (' ', 0.20), ('E', 0.10), ('O', 0.05), ('A', 0.03), ('I', 0.02)]),
    ("CK", &[(' ', 0.50), ('E', 0.20), ('S', 0.12), ('I', 0.08), ('A', 0.05), ('L', 0.03), ('Y', 0.02)]),
    ("LI", &[('N', 0.25), ('K', 0.20), ('T', 0.15), ('E', 0.12), ('G', 0.10), ('C', 0.08), ('F', 0.05), ('S', 0.03), ('V', 0.02)]),
    ("QU", &[('E', 0.50), ('I', 0.30), ('A', 0.10), ('O', 0.08), ('R', 0.02)]),
];

/// 单字母 -> 常见后继字母（按可能性降序）。
pub const LETTER_SUCCESSORS: &[(char, &[char])] = &[
    ('T', &['H', 'E', 'I', 'O', 'A', 'R', 'S', 'U']),
    ('H', &['E', 'I', 'A', 'O', 'T', 'R', 'U', 'Y']),
    ('E', &['R', 'N', 'D', 'S', 'T', 'A', 'L', 'I']),
    ('A', &['N', 'R', 'L', 'T', 'S', 'I', 'C', 'M']),
    ('I', &['N', 'T', 'S', 'O', 'L', 'C', 'E', 'D']),
    ('N', &['D', 'G', 'T', 'E', 'S', 'I', 'A', 'O']),
    ('O', &['N', 'R', 'U', 'T', 'F', 'M', 'L', 'W']),
    ('R', &['E', 'I', 'A', 'O', 'T', 'S', 'N', 'D']),
    ('S', &['T', 'E', 'I', 'A', 'O', 'H', 'U', 'C']),
    ('D', &['E', 'I', 'A', 'O', 'U', 'R', 'Y']),
    ('L', &['E', 'I', 'Y', 'A', 'O', 'U', 'D']),
    ('C', &['H', 'O', 'A', 'E', 'I', 'T', 'L', 'K']),
    ('U', &['R', 'S', 'T', 'L', 'N', 'P', 'C', 'M']),
    ('M', &['E', 'A', 'I', 'O', 'P', 'U', 'B']),
    ('P', &['E', 'R', 'O', 'A', 'L', 'I', 'T', 'H']),
    ('F', &['O', 'R', 'E', 'I', 'A', 'U', 'L', 'T']),
    ('G', &['E', 'H', 'I', 'O', 'A', 'R', 'U', 'L']),
    ('W', &['A', 'I', 'E', 'H', 'O', 'R', 'T']),
    ('Y', &[' ', 'E', 'I', 'O', 'A', 'S', 'T']),
    ('B', &['E', 'A', 'U', 'I', 'O', 'R', 'L', 'Y']),
    ('V', &['E', 'I', 'A', 'O', 'U', 'Y']),
    ('K', &['E', 'I', 'A', 'O', 'N', 'S']),
    ('J', &['U', 'E', 'A', 'O', 'I']),
    ('X', &['P', 'T', 'C', 'I', 'E']),
    ('Q', &['U']),
    ('Z', &['E', 'I', 'A', 'O', 'Y']),
];
