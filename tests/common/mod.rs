//! Sample prose shared by the integration tests, plus legacy encoders.
#![allow(dead_code)]

use encoding_rs::Encoding;

pub const JAPANESE: &str = concat!(
    "私たちは毎日の生活の中で、たくさんのことを考えています。朝起きてから夜寝るまで、いろいろなことがありますが、",
    "大切なのは自分の気持ちを大事にすることだと思います。友だちと話したり、家族と一緒にご飯を食べたりする時間は、",
    "とても楽しいものです。しかし、忙しい日が続くと、そういう時間を持つことが難しくなってしまいます。",
    "そこで、私は週に一度、ゆっくりと本を読む時間を作ることにしました。本を読んでいると、心が落ち着いて、",
    "新しい考えが生まれてくるような気がします。これからも、このような時間を大切にしていきたいと思っています。",
    "みなさんも、自分のための時間を持ってみてはいかがでしょうか。きっと何かいいことが見つかるはずです。",
);

/// One sentence: too short for any prober to settle early.
pub const JAPANESE_SHORT: &str = "私たちは毎日の生活の中で、たくさんのことを考えています。";

pub const SIMPLIFIED_CHINESE: &str = concat!(
    "我们今天在这里讨论的问题，是关于中国经济发展的一些基本情况。在过去的几十年里，中国的经济有了很大的发展，",
    "人民的生活水平也得到了明显的提高。但是，我们也要看到，发展中还存在着不少问题，需要我们认真地去解决。",
    "政府已经提出了一系列的政策和措施，希望能够推动社会的全面进步。",
);

pub const TRADITIONAL_CHINESE: &str = concat!(
    "我們今天在這裡討論的問題，是關於經濟發展的一些基本情況。在過去的幾十年裡，經濟有了很大的發展，",
    "人民的生活水平也得到了明顯的提高。但是，我們也要看到，發展中還存在著不少問題，需要我們認真地去解決。",
    "政府已經提出了一系列的政策和措施，希望能夠推動社會的全面進步。",
);

pub const KOREAN: &str = concat!(
    "우리는 오늘 한국의 역사와 문화에 대해서 이야기를 하려고 합니다. 한국은 오랜 역사를 가진 나라이며, ",
    "많은 사람들이 전통 문화를 소중하게 생각합니다. 요즘에는 한국의 음악과 영화가 세계적으로 인기가 많아서, ",
    "외국 사람들도 한국어를 배우고 싶어 합니다. 이것은 정말 좋은 일이라고 생각합니다. ",
    "앞으로도 우리는 서로의 문화를 이해하고 존중하는 마음을 가지고 함께 살아가야 할 것입니다.",
);

/// Encodes `text`, failing the test if any character is unmappable.
pub fn encode(encoding: &'static Encoding, text: &str) -> Vec<u8> {
    let (bytes, _, unmappable) = encoding.encode(text);
    assert!(!unmappable, "{} cannot encode the sample", encoding.name());
    bytes.into_owned()
}

pub fn euc_jp(text: &str) -> Vec<u8> {
    encode(encoding_rs::EUC_JP, text)
}

pub fn shift_jis(text: &str) -> Vec<u8> {
    encode(encoding_rs::SHIFT_JIS, text)
}

pub fn gbk(text: &str) -> Vec<u8> {
    encode(encoding_rs::GBK, text)
}

pub fn big5(text: &str) -> Vec<u8> {
    encode(encoding_rs::BIG5, text)
}

pub fn euc_kr(text: &str) -> Vec<u8> {
    encode(encoding_rs::EUC_KR, text)
}
