//! Word lists for the lexical scorer.
//!
//! Valences use the -4.0..=4.0 scale of crowd-rated sentiment lexicons. Keys
//! are lowercase. Emoticons and emoji are matched against the raw token.

pub(crate) const VALENCES: &[(&str, f64)] = &[
    // Emoticons and emoji
    (":)", 2.0),
    (":-)", 1.3),
    (":(", -1.9),
    (":-(", -1.5),
    (":d", 2.3),
    (";)", 0.9),
    (":/", -1.4),
    (":'(", -2.2),
    ("<3", 1.9),
    ("xd", 1.5),
    ("😂", 1.6),
    ("🤣", 1.6),
    ("😍", 2.8),
    ("❤️", 2.9),
    ("❤", 2.9),
    ("👍", 1.6),
    ("🔥", 1.5),
    ("😊", 2.1),
    ("🙏", 1.2),
    ("😢", -2.1),
    ("😭", -1.8),
    ("😡", -2.9),
    ("👎", -1.6),
    ("🤮", -2.6),
    // Words
    ("abandon", -1.9),
    ("abuse", -3.2),
    ("accept", 1.6),
    ("accurate", 1.7),
    ("admire", 2.1),
    ("adorable", 2.2),
    ("afraid", -2.2),
    ("agree", 1.5),
    ("alarming", -2.0),
    ("amazed", 2.2),
    ("amazing", 2.8),
    ("amused", 1.8),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("anxious", -1.0),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("ashamed", -2.1),
    ("awesome", 3.1),
    ("awful", -2.0),
    ("awkward", -0.6),
    ("bad", -2.5),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bitter", -1.8),
    ("blessed", 2.9),
    ("bored", -1.1),
    ("boring", -1.3),
    ("brilliant", 2.8),
    ("broken", -2.1),
    ("bullshit", -2.8),
    ("calm", 1.3),
    ("care", 2.2),
    ("careless", -1.5),
    ("charming", 2.8),
    ("cheap", -0.9),
    ("cheer", 2.3),
    ("clean", 1.7),
    ("clear", 1.6),
    ("clever", 2.0),
    ("confused", -1.3),
    ("confusing", -0.9),
    ("cool", 1.3),
    ("crap", -1.6),
    ("crazy", -1.4),
    ("creative", 1.9),
    ("creepy", -2.5),
    ("cringe", -1.9),
    ("cruel", -2.8),
    ("cry", -2.1),
    ("cute", 2.0),
    ("damn", -1.7),
    ("dead", -3.3),
    ("delight", 2.9),
    ("delighted", 2.3),
    ("depressing", -1.6),
    ("deserve", 1.3),
    ("destroy", -2.6),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("dumb", -2.3),
    ("easy", 1.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("entertaining", 2.3),
    ("epic", 2.1),
    ("evil", -3.4),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fake", -2.1),
    ("false", -1.4),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("favourite", 2.0),
    ("fear", -2.2),
    ("fine", 0.8),
    ("fool", -1.9),
    ("fraud", -2.8),
    ("free", 2.3),
    ("fun", 2.3),
    ("funny", 1.9),
    ("garbage", -2.4),
    ("genius", 2.7),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("great", 3.1),
    ("gross", -2.1),
    ("happy", 2.7),
    ("harm", -2.5),
    ("hate", -2.7),
    ("hated", -3.2),
    ("helpful", 1.9),
    ("hilarious", 1.7),
    ("hope", 1.9),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("idiot", -2.3),
    ("ignorant", -1.6),
    ("impressive", 2.3),
    ("incredible", 2.0),
    ("informative", 1.9),
    ("insane", -1.7),
    ("inspiring", 2.4),
    ("interesting", 1.7),
    ("joke", 1.2),
    ("joy", 2.8),
    ("kind", 2.4),
    ("lame", -1.8),
    ("laugh", 2.6),
    ("legend", 1.7),
    ("liar", -2.9),
    ("like", 2.0),
    ("liked", 1.8),
    ("lol", 1.8),
    ("lmao", 2.0),
    ("lonely", -1.6),
    ("lost", -1.3),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loving", 2.9),
    ("lucky", 1.8),
    ("mad", -2.2),
    ("masterpiece", 3.1),
    ("mediocre", -1.0),
    ("mess", -1.5),
    ("miss", -0.6),
    ("misleading", -1.7),
    ("nasty", -2.6),
    ("nice", 1.8),
    ("no", -1.2),
    ("nonsense", -1.7),
    ("ok", 1.2),
    ("okay", 0.9),
    ("outstanding", 3.0),
    ("pain", -2.3),
    ("pathetic", -2.5),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("poor", -2.1),
    ("pretty", 2.2),
    ("problem", -1.7),
    ("proud", 2.1),
    ("rage", -2.6),
    ("relax", 1.9),
    ("respect", 2.1),
    ("ridiculous", -1.5),
    ("rubbish", -1.8),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scam", -2.7),
    ("scary", -2.2),
    ("shame", -2.1),
    ("shit", -2.6),
    ("sick", -2.3),
    ("silly", 0.1),
    ("smart", 1.7),
    ("smile", 1.5),
    ("sorry", -0.3),
    ("spam", -1.5),
    ("stunning", 1.6),
    ("stupid", -2.4),
    ("success", 2.7),
    ("suck", -1.9),
    ("sucks", -1.5),
    ("super", 2.9),
    ("support", 1.7),
    ("sweet", 2.0),
    ("talented", 2.3),
    ("terrible", -2.1),
    ("terrific", 2.1),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("tragic", -3.4),
    ("trash", -1.5),
    ("true", 1.8),
    ("trust", 2.3),
    ("ugly", -2.3),
    ("underrated", 1.0),
    ("unfortunately", -1.4),
    ("upset", -1.6),
    ("useful", 1.9),
    ("useless", -1.8),
    ("valuable", 2.1),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("weak", -1.9),
    ("weird", -0.7),
    ("welcome", 2.0),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("worried", -1.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worth", 0.9),
    ("worthless", -1.9),
    ("wow", 2.8),
    ("wrong", -2.1),
    ("yes", 1.7),
];

/// Intensity modifiers. Positive values amplify, negative values dampen.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("amazingly", 0.293),
    ("awfully", 0.293),
    ("completely", 0.293),
    ("considerably", 0.293),
    ("deeply", 0.293),
    ("enormously", 0.293),
    ("entirely", 0.293),
    ("especially", 0.293),
    ("exceptionally", 0.293),
    ("extremely", 0.293),
    ("fully", 0.293),
    ("greatly", 0.293),
    ("hella", 0.293),
    ("highly", 0.293),
    ("hugely", 0.293),
    ("incredibly", 0.293),
    ("intensely", 0.293),
    ("more", 0.293),
    ("most", 0.293),
    ("particularly", 0.293),
    ("purely", 0.293),
    ("quite", 0.293),
    ("really", 0.293),
    ("remarkably", 0.293),
    ("so", 0.293),
    ("substantially", 0.293),
    ("thoroughly", 0.293),
    ("totally", 0.293),
    ("tremendously", 0.293),
    ("truly", 0.293),
    ("unbelievably", 0.293),
    ("utterly", 0.293),
    ("very", 0.293),
    ("almost", -0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("kinda", -0.293),
    ("less", -0.293),
    ("little", -0.293),
    ("marginally", -0.293),
    ("occasionally", -0.293),
    ("partly", -0.293),
    ("scarcely", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("sorta", -0.293),
];

pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];
