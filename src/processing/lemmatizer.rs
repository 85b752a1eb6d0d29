//! Rule-based English lemmatizer
//!
//! Exception tables first, then suffix rules chosen by part of speech.
//! Verb stems recovered from `-ed`/`-ing` get consonant undoubling and
//! silent-`e` restoration (`managed` -> `manage`, `running` -> `run`).

use crate::processing::annotator::PosTag;
use std::collections::{HashMap, HashSet};

const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("being", "be"), ("has", "have"), ("had", "have"), ("having", "have"), ("does", "do"),
    ("did", "do"), ("done", "do"), ("doing", "do"), ("goes", "go"), ("went", "go"), ("gone", "go"),
    ("going", "go"), ("built", "build"), ("rebuilt", "rebuild"), ("led", "lead"), ("ran", "run"),
    ("wrote", "write"), ("written", "write"), ("rewrote", "rewrite"), ("rewritten", "rewrite"),
    ("made", "make"), ("took", "take"), ("taken", "take"), ("undertook", "undertake"),
    ("undertaken", "undertake"), ("gave", "give"), ("given", "give"), ("got", "get"),
    ("gotten", "get"), ("saw", "see"), ("seen", "see"), ("oversaw", "oversee"),
    ("overseen", "oversee"), ("knew", "know"), ("known", "know"), ("brought", "bring"),
    ("bought", "buy"), ("thought", "think"), ("taught", "teach"), ("caught", "catch"),
    ("sought", "seek"), ("found", "find"), ("held", "hold"), ("upheld", "uphold"), ("kept", "keep"),
    ("left", "leave"), ("met", "meet"), ("paid", "pay"), ("said", "say"), ("sold", "sell"),
    ("sent", "send"), ("spent", "spend"), ("stood", "stand"), ("understood", "understand"),
    ("told", "tell"), ("won", "win"), ("began", "begin"), ("begun", "begin"), ("chose", "choose"),
    ("chosen", "choose"), ("drove", "drive"), ("driven", "drive"), ("grew", "grow"),
    ("grown", "grow"), ("rose", "rise"), ("risen", "rise"), ("spoke", "speak"), ("spoken", "speak"),
    ("fell", "fall"), ("fallen", "fall"), ("felt", "feel"), ("heard", "hear"), ("lost", "lose"),
    ("meant", "mean"), ("became", "become"), ("shown", "show"), ("drew", "draw"), ("drawn", "draw"),
    ("flew", "fly"), ("flown", "fly"), ("forgot", "forget"), ("forgotten", "forget"),
    ("threw", "throw"), ("thrown", "throw"), ("dealt", "deal"), ("lent", "lend"), ("laid", "lay"),
    ("struck", "strike"), ("shot", "shoot"), ("woke", "wake"), ("wore", "wear"), ("worn", "wear"),
    ("withdrew", "withdraw"), ("withdrawn", "withdraw"), ("overcame", "overcome"),
    ("dying", "die"), ("lying", "lie"), ("tying", "tie"),
    ("controlled", "control"), ("controlling", "control"), ("travelled", "travel"),
    ("travelling", "travel"), ("modelled", "model"), ("modelling", "model"),
    ("labelled", "label"), ("labelling", "label"), ("cancelled", "cancel"),
    ("cancelling", "cancel"), ("patrolled", "patrol"), ("compelled", "compel"),
    ("propelled", "propel"), ("excelled", "excel"), ("enrolled", "enroll"), ("fed", "feed"),
    ("died", "die"), ("lied", "lie"), ("tied", "tie"), ("agreed", "agree"),
    ("disagreed", "disagree"), ("freed", "free"), ("guaranteed", "guarantee"),
    ("decreed", "decree"), ("refereed", "referee"),
];

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("men", "man"), ("women", "woman"), ("children", "child"), ("feet", "foot"),
    ("teeth", "tooth"), ("mice", "mouse"), ("geese", "goose"), ("criteria", "criterion"),
    ("phenomena", "phenomenon"), ("analyses", "analysis"), ("diagnoses", "diagnosis"),
    ("hypotheses", "hypothesis"), ("theses", "thesis"), ("crises", "crisis"), ("bases", "basis"),
    ("axes", "axis"), ("indices", "index"), ("matrices", "matrix"), ("vertices", "vertex"),
    ("appendices", "appendix"), ("lives", "life"), ("wives", "wife"), ("knives", "knife"),
    ("leaves", "leaf"), ("halves", "half"), ("shelves", "shelf"), ("selves", "self"),
    ("caches", "cache"), ("niches", "niche"), ("movies", "movie"), ("cookies", "cookie"),
    ("rookies", "rookie"), ("zombies", "zombie"), ("calories", "calorie"), ("goalies", "goalie"),
    ("techniques", "technique"), ("people", "people"),
];

/// Words ending in `s` that are already singular
const SINGULAR_S: &[&str] = &[
    "kubernetes", "aws", "css", "js", "ios", "macos", "devops", "mlops", "secops", "ops",
    "postgres", "jenkins", "pandas", "news", "series", "species", "physics", "mathematics",
    "economics", "ethics", "analytics", "logistics", "statistics", "means", "lens", "gas",
    "atlas", "canvas", "alias", "bias", "chaos", "windows", "sales", "yes", "this", "its",
    "always", "perhaps", "whereas", "thus", "towards", "afterwards", "besides", "sometimes",
    "his", "redis", "tennis", "iris", "metropolis", "aegis", "debris",
];

/// Verb stems (suffix already removed) that take a silent `e`
const E_STEMS: &[&str] = &[
    "us", "stor", "scor", "explor", "ignor", "restor", "ador", "bor", "snor", "implor",
    "invit", "cit", "excit", "recit", "writ", "ignit", "unit", "expedit", "delet", "complet",
    "compet", "deplet", "phon", "clon", "hon", "zon", "ston", "dron", "condon", "aton", "tun",
    "prun", "creat", "recreat", "rul", "typ",
];

/// Verb stems that match a silent-`e` pattern but are complete as-is
const NO_E_STEMS: &[&str] = &[
    "develop", "envelop", "gallop", "gossip", "worship", "kidnap", "handicap", "pivot",
    "output", "input", "focus", "discus", "add", "err", "purr", "ebb", "egg", "sync",
];

/// Base verbs that merely end in `ed`
const BASE_ED: &[&str] = &["embed", "shed", "wed", "bed", "red", "bred", "sled", "shred"];

pub struct Lemmatizer {
    irregular_verbs: HashMap<&'static str, &'static str>,
    irregular_nouns: HashMap<&'static str, &'static str>,
    singular_s: HashSet<&'static str>,
    e_stems: HashSet<&'static str>,
    no_e_stems: HashSet<&'static str>,
    base_ed: HashSet<&'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self {
            irregular_verbs: IRREGULAR_VERBS.iter().copied().collect(),
            irregular_nouns: IRREGULAR_NOUNS.iter().copied().collect(),
            singular_s: SINGULAR_S.iter().copied().collect(),
            e_stems: E_STEMS.iter().copied().collect(),
            no_e_stems: NO_E_STEMS.iter().copied().collect(),
            base_ed: BASE_ED.iter().copied().collect(),
        }
    }

    /// True for inflected forms the irregular verb table knows about
    pub fn is_irregular_verb_form(&self, word: &str) -> bool {
        self.irregular_verbs.contains_key(word)
    }

    pub fn lemmatize(&self, word: &str, pos: PosTag) -> String {
        let word = word.to_lowercase();

        match pos {
            PosTag::Noun | PosTag::Propn => self.lemmatize_noun(&word),
            PosTag::Verb | PosTag::Aux => self.lemmatize_verb(&word),
            PosTag::Adj => match word.as_str() {
                "better" | "best" => "good".to_string(),
                "worse" | "worst" => "bad".to_string(),
                _ => word,
            },
            _ => word,
        }
    }

    fn lemmatize_noun(&self, word: &str) -> String {
        if let Some(lemma) = self.irregular_nouns.get(word) {
            return lemma.to_string();
        }

        if word.len() <= 3
            || self.singular_s.contains(word)
            || !word.ends_with('s')
            || word.ends_with("ss")
            || word.ends_with("us")
            || word.ends_with("sis")
            || word.ends_with("xis")
            || word.ends_with("'s")
        {
            return word.to_string();
        }

        for (suffix, replacement) in [
            ("sses", "ss"),
            ("ches", "ch"),
            ("shes", "sh"),
            ("xes", "x"),
            ("zzes", "zz"),
        ] {
            if let Some(stem) = word.strip_suffix(suffix) {
                return format!("{}{}", stem, replacement);
            }
        }

        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ies") {
                return format!("{}y", stem);
            }
        }

        word[..word.len() - 1].to_string()
    }

    fn lemmatize_verb(&self, word: &str) -> String {
        if let Some(lemma) = self.irregular_verbs.get(word) {
            return lemma.to_string();
        }

        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ing") {
                if has_vowel(stem) {
                    return self.restore_stem(stem, false);
                }
            }
        }

        // need, exceed, proceed: the past forms ending in -eed are in the irregular table
        if word.ends_with("eed") || self.base_ed.contains(word) {
            return word.to_string();
        }

        if word.len() > 3 {
            if let Some(stem) = word.strip_suffix("ed") {
                if has_vowel(stem) {
                    return self.restore_stem(stem, true);
                }
            }
        }

        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ies") {
                return format!("{}y", stem);
            }
        }

        if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") {
            for suffix in ["sses", "ches", "shes", "xes", "zzes", "oes", "cuses"] {
                if word.ends_with(suffix) {
                    return word[..word.len() - 2].to_string();
                }
            }
            return word[..word.len() - 1].to_string();
        }

        word.to_string()
    }

    /// Rebuild a base form from a stem left by removing `-ed` or `-ing`
    fn restore_stem(&self, stem: &str, past: bool) -> String {
        let chars: Vec<char> = stem.chars().collect();
        let n = chars.len();

        if n < 2 {
            return stem.to_string();
        }

        if self.no_e_stems.contains(stem) {
            return stem.to_string();
        }

        if self.e_stems.contains(stem) {
            return format!("{}e", stem);
        }

        // applied -> apply
        if past && chars[n - 1] == 'i' {
            return format!("{}y", &stem[..stem.len() - 1]);
        }

        // running -> run, but keep -ll/-ss/-zz/-ff stems (install, pass, buzz, staff)
        if chars[n - 1] == chars[n - 2]
            && is_consonant(chars[n - 1])
            && !matches!(chars[n - 1], 'l' | 's' | 'z' | 'f')
        {
            return stem[..stem.len() - 1].to_string();
        }

        if needs_silent_e(&chars) {
            return format!("{}e", stem);
        }

        stem.to_string()
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_vowel(stem: &str) -> bool {
    stem.chars().any(|c| is_vowel(c) || c == 'y')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Stem endings whose base form ends in a silent `e`
fn needs_silent_e(chars: &[char]) -> bool {
    let n = chars.len();
    let last = chars[n - 1];
    let prev = chars[n - 2];
    // The character before a single vowel; vowel pairs (treat, avoid, claim) never take `e`.
    let before_prev = if n >= 3 { Some(chars[n - 3]) } else { None };
    let single_vowel = is_vowel(prev) && before_prev.map_or(true, |c| !is_vowel(c));

    match last {
        // experienc(e), solv(e), continu(e)
        'c' | 'v' | 'u' => true,
        // optimiz(e), analyz(e), analys(e) handled below for 's'
        'z' => prev == 'i' || prev == 'y',
        // manag(e), chang(e), merg(e), judg(e)
        'g' => prev == 'a' || (prev == 'n' && before_prev.map_or(false, |c| c == 'a' || c == 'e'))
            || matches!(prev, 'r' | 'd' | 'l'),
        // enabl(e), handl(e), compil(e), schedul(e)
        'l' => matches!(prev, 'b' | 'c' | 'd' | 'f' | 'g' | 'k' | 'p' | 't' | 'z')
            || (prev == 'i' && single_vowel)
            || (prev == 'a' && single_vowel && n <= 4)
            || (prev == 'u' && before_prev == Some('d')),
        // secur(e), requir(e), hir(e), shar(e)
        'r' => {
            (prev == 'u' && single_vowel)
                || (prev == 'i' && (single_vowel || before_prev == Some('u')))
                || (prev == 'a' && single_vowel)
        }
        // releas(e), advis(e), clos(e), caus(e), licens(e)
        's' => match prev {
            'a' => matches!(before_prev, Some('e') | Some('h')),
            'i' | 'o' | 'y' => true,
            'u' => before_prev != Some('c') && single_vowel,
            c => is_consonant(c) && c != 's',
        },
        // creat(e), vot(e), execut(e)
        't' => {
            (matches!(prev, 'a' | 'o' | 'u') && single_vowel && before_prev.is_some())
                || (prev == 'a' && matches!(before_prev, Some('i') | Some('u')))
        }
        // provid(e), includ(e), cod(e), upgrad(e)
        'd' => matches!(prev, 'a' | 'i' | 'o' | 'u') && single_vowel && before_prev.is_some(),
        // combin(e), defin(e)
        'n' => prev == 'i' && single_vowel && before_prev.map_or(false, |c| c != 'g'),
        // assum(e), fram(e), welcom(e)
        'm' => single_vowel && before_prev.is_some(),
        // shap(e), typ(e), scop(e)
        'p' => single_vowel && before_prev.is_some(),
        // bak(e), invok(e), strik(e)
        'k' => single_vowel && before_prev.is_some(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verb(word: &str) -> String {
        Lemmatizer::new().lemmatize(word, PosTag::Verb)
    }

    fn noun(word: &str) -> String {
        Lemmatizer::new().lemmatize(word, PosTag::Noun)
    }

    #[test]
    fn test_noun_plurals() {
        assert_eq!(noun("apis"), "api");
        assert_eq!(noun("companies"), "company");
        assert_eq!(noun("processes"), "process");
        assert_eq!(noun("approaches"), "approach");
        assert_eq!(noun("boxes"), "box");
        assert_eq!(noun("databases"), "database");
        assert_eq!(noun("services"), "service");
        assert_eq!(noun("ties"), "tie");
        assert_eq!(noun("kpis"), "kpi");
        assert_eq!(noun("wikis"), "wiki");
    }

    #[test]
    fn test_noun_exceptions() {
        assert_eq!(noun("analysis"), "analysis");
        assert_eq!(noun("basis"), "basis");
        assert_eq!(noun("axis"), "axis");
        assert_eq!(noun("this"), "this");
        assert_eq!(noun("redis"), "redis");
        assert_eq!(noun("status"), "status");
        assert_eq!(noun("kubernetes"), "kubernetes");
        assert_eq!(noun("class"), "class");
        assert_eq!(noun("criteria"), "criterion");
        assert_eq!(noun("caches"), "cache");
        assert_eq!(noun("gas"), "gas");
    }

    #[test]
    fn test_regular_past_tense() {
        assert_eq!(verb("developed"), "develop");
        assert_eq!(verb("managed"), "manage");
        assert_eq!(verb("created"), "create");
        assert_eq!(verb("experienced"), "experience");
        assert_eq!(verb("improved"), "improve");
        assert_eq!(verb("applied"), "apply");
        assert_eq!(verb("stopped"), "stop");
        assert_eq!(verb("installed"), "install");
        assert_eq!(verb("required"), "require");
        assert_eq!(verb("designed"), "design");
        assert_eq!(verb("looked"), "look");
        assert_eq!(verb("agreed"), "agree");
        assert_eq!(verb("optimized"), "optimize");
        assert_eq!(verb("provided"), "provide");
        assert_eq!(verb("released"), "release");
        assert_eq!(verb("enabled"), "enable");
        assert_eq!(verb("treated"), "treat");
        assert_eq!(verb("visited"), "visit");
        assert_eq!(verb("added"), "add");
        assert_eq!(verb("used"), "use");
        assert_eq!(verb("evaluated"), "evaluate");
    }

    #[test]
    fn test_base_forms_ending_like_inflections() {
        assert_eq!(verb("need"), "need");
        assert_eq!(verb("exceed"), "exceed");
        assert_eq!(verb("embed"), "embed");
        assert_eq!(verb("bring"), "bring");
        assert_eq!(verb("sing"), "sing");
    }

    #[test]
    fn test_progressive() {
        assert_eq!(verb("using"), "use");
        assert_eq!(verb("looking"), "look");
        assert_eq!(verb("building"), "build");
        assert_eq!(verb("running"), "run");
        assert_eq!(verb("writing"), "write");
        assert_eq!(verb("changing"), "change");
        assert_eq!(verb("configuring"), "configure");
        assert_eq!(verb("studying"), "study");
        assert_eq!(verb("maintaining"), "maintain");
        assert_eq!(verb("scaling"), "scale");
        assert_eq!(verb("coding"), "code");
        assert_eq!(verb("debugging"), "debug");
    }

    #[test]
    fn test_third_person_and_irregular() {
        assert_eq!(verb("builds"), "build");
        assert_eq!(verb("manages"), "manage");
        assert_eq!(verb("fixes"), "fix");
        assert_eq!(verb("carries"), "carry");
        assert_eq!(verb("built"), "build");
        assert_eq!(verb("led"), "lead");
        assert_eq!(verb("was"), "be");
    }

    #[test]
    fn test_other_tags_unchanged() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemmatize("Quickly", PosTag::Adv), "quickly");
        assert_eq!(lemmatizer.lemmatize("best", PosTag::Adj), "good");
        assert_eq!(lemmatizer.lemmatize(".", PosTag::Punct), ".");
    }
}
