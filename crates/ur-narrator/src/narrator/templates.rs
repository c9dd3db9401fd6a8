//! Per-kind phrase tables.

use ur_core::DivinationKind;

/// Fixed phrases for one divination system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindPhrases {
    /// How the tradition frames the drawn symbols; follows "…は".
    pub classical_framing: &'static str,
    /// The psychological reading of the system; a full sentence.
    pub psychological_framing: &'static str,
    /// Concrete actions, most important first; each follows "・" and
    /// precedes the tone's closing.
    pub actions: [&'static str; 3],
}

/// Phrase table for `kind`.
pub fn phrases_for(kind: DivinationKind) -> &'static KindPhrases {
    match kind {
        DivinationKind::Tarot => &TAROT,
        DivinationKind::IChing => &ICHING,
        DivinationKind::Runes => &RUNES,
        DivinationKind::Kabbalah => &KABBALAH,
        DivinationKind::Astrology => &ASTROLOGY,
        DivinationKind::Chakra => &CHAKRA,
        DivinationKind::FengShui => &FENGSHUI,
        DivinationKind::AuraSoma => &AURASOMA,
        DivinationKind::Akashic => &AKASHIC,
        DivinationKind::Mayan => &MAYAN,
        DivinationKind::Celtic => &CELTIC,
        DivinationKind::Numerology => &NUMEROLOGY,
    }
}

const TAROT: KindPhrases = KindPhrases {
    classical_framing: "魂の旅路における現在の段階を示す象徴とされます",
    psychological_framing: "カードの絵柄は、あなたが意識していない感情や願望を映す鏡として働きます。",
    actions: [
        "心に残ったカードの絵柄を日記に書き留める",
        "カードが示す課題について信頼できる人と話す",
        "一週間後に同じ問いをもう一度見直す",
    ],
};

const ICHING: KindPhrases = KindPhrases {
    classical_framing: "天地の変化の理を映し、進むべき時と退くべき時を告げるものとされます",
    psychological_framing: "卦は状況を固定されたものではなく、移り変わる流れとして捉え直す手がかりになります。",
    actions: [
        "今の状況を「変わるもの」と「変わらないもの」に分けて書き出す",
        "急いで決めず、一晩置いてから判断する",
        "変爻が示す変化の兆しを日々の出来事の中に探す",
    ],
};

const RUNES: KindPhrases = KindPhrases {
    classical_framing: "オーディンが世界樹から得た知恵の欠片であり、運命の糸を示すとされます",
    psychological_framing: "ルーンの簡潔な形は、複雑な状況の核にある一つの力を見極める助けになります。",
    actions: [
        "引いたルーンの形を紙に描き、目に付く場所に置く",
        "ルーンが示す力を一日の中で一度意識して使う",
        "逆位置のルーンが示す障害を一つだけ取り除く",
    ],
};

const KABBALAH: KindPhrases = KindPhrases {
    classical_framing: "生命の樹の上で神の光が流れる通り道を示すとされます",
    psychological_framing: "セフィラは人格の諸側面を表し、どの資質を育てるべきかを示唆します。",
    actions: [
        "示されたセフィラの資質を体現する人物を一人思い浮かべる",
        "自分の数に対応する小さな習慣を一つ始める",
        "足りない資質を補う行動を週に一度取り入れる",
    ],
};

const ASTROLOGY: KindPhrases = KindPhrases {
    classical_framing: "天球の配置が地上の出来事と人の気質に映し出されたものとされます",
    psychological_framing: "星座とハウスは、あなたの気質と今エネルギーが向かいやすい領域を言語化する枠組みです。",
    actions: [
        "強調されたハウスの領域で一つ目標を立てる",
        "エレメントの偏りを補う活動を取り入れる",
        "逆行中の惑星に関わる事柄は確認を二重にする",
    ],
};

const CHAKRA: KindPhrases = KindPhrases {
    classical_framing: "身体を貫く生命エネルギーの結節点の状態を示すとされます",
    psychological_framing: "チャクラの偏りは、心と身体のどこに負荷や滞りが生じているかの比喩として読めます。",
    actions: [
        "最も弱いチャクラに対応する色を身に着ける",
        "五分間の呼吸瞑想で身体の感覚に意識を向ける",
        "過剰なチャクラの領域では一歩引いて休む",
    ],
};

const FENGSHUI: KindPhrases = KindPhrases {
    classical_framing: "天地の気の流れと人の命卦との調和を示すとされます",
    psychological_framing: "方位と空間の整え方は、生活環境が気分や集中に与える影響を意識させてくれます。",
    actions: [
        "吉方位に向けて机や枕の位置を整える",
        "焦点となる部屋の不要な物を一つ手放す",
        "玄関に光と風を通す",
    ],
};

const AURASOMA: KindPhrases = KindPhrases {
    classical_framing: "魂が選んだ色の光であり、オーラの状態を映すとされます",
    psychological_framing: "惹かれる色は、今のあなたが求めている感情の質を教えてくれます。",
    actions: [
        "魂のボトルの色の小物を身近に置く",
        "課題のボトルの色が表す感情に名前を付けてみる",
        "未来のボトルの色を思い描きながら深呼吸する",
    ],
};

const AKASHIC: KindPhrases = KindPhrases {
    classical_framing: "宇宙の記憶に刻まれた魂の履歴の一頁とされます",
    psychological_framing: "過去生の物語は、繰り返してしまう行動の型を客観的に眺めるための寓話として役立ちます。",
    actions: [
        "繰り返している行動の型を一つ書き出す",
        "魂の才能として示された資質を今日一度使う",
        "人生の課題に関わる小さな選択を意識して変える",
    ],
};

const MAYAN: KindPhrases = KindPhrases {
    classical_framing: "聖なる暦ツォルキンが刻む宇宙の時のリズムを示すとされます",
    psychological_framing: "紋章と音は、自分の持ち味と日々のリズムを見つめ直すための言葉を与えてくれます。",
    actions: [
        "今日のキンの音が示すテーマで一日を始める",
        "類似の紋章を持つ人との縁を大切にする",
        "反対の紋章が示す課題から一つ学ぶ",
    ],
};

const CELTIC: KindPhrases = KindPhrases {
    classical_framing: "ドルイドが木々に託した知恵であり、自然の循環の中の位置を示すとされます",
    psychological_framing: "樹木の象徴は、成長には季節があることを思い出させ、焦りを和らげてくれます。",
    actions: [
        "示された木に触れるか、その写真を眺める",
        "自然の中を十分間歩く",
        "今が成長のどの季節にあたるかを書き留める",
    ],
};

const NUMEROLOGY: KindPhrases = KindPhrases {
    classical_framing: "万物の根源たる数の振動があなたに与えた響きとされます",
    psychological_framing: "数は、あなたの傾向と人生の周期を簡潔に整理するための物差しになります。",
    actions: [
        "運命数が示す強みを活かせる場面を一つ探す",
        "個人年の数に合わせて今年の目標を見直す",
        "数の課題が示す弱点に一つだけ手を打つ",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_distinct_phrases() {
        let all = DivinationKind::all();
        for (i, a) in all.iter().enumerate() {
            let p = phrases_for(*a);
            assert!(p.actions.iter().all(|s| !s.is_empty()), "{a}");
            for b in &all[i + 1..] {
                assert_ne!(p.classical_framing, phrases_for(*b).classical_framing, "{a} / {b}");
            }
        }
    }
}
