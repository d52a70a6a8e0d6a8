// Advice prompt template and builder.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::advice::models::AdviceRequest;
use crate::llm_client::prompts::{fill_template, TONE_INSTRUCTION};

/// Advice prompt template. Placeholders: `{age_group}`, `{concern}`,
/// `{concern_upper}`, `{tone_instruction}`.
///
/// Section order and headings are fixed. `{concern_upper}` appears only in the
/// reframing heading.
pub const ADVICE_PROMPT_TEMPLATE: &str = r#"Provide holistic mental well-being advice for a {age_group} individual facing '{concern}'.

**🔍 EMOTIONAL INTELLIGENCE ANALYSIS OF THE CONCERN**
- What underlying emotions (fear, anxiety, self-doubt, stress) might the user be experiencing?
- Apply Daniel Goleman's Emotional Intelligence framework to analyze this.
- Suggest an **emotion-labeling exercise** (from *Atlas of the Heart* by Brené Brown).

**📜 SPIRITUAL PERSPECTIVE (WITH SOURCES)**
- Extract wisdom from each and display in different lines:
  - **Bhagavad Gita** (cite exact chapter and verse)
  - **Quran** (cite Surah and Ayah)
  - **Bible** (cite Book, Chapter, and Verse)
  - **Guru Granth Sahib** (cite Ang number)
  - **Tripitaka** (cite text and verse)

**🧠 PSYCHOLOGY & PHILOSOPHICAL REFRAMING OF '{concern_upper}'**
- Use **Stoicism (Marcus Aurelius, Seneca, Epictetus)** to suggest a resilient mindset.
- Apply **Existentialism (Nietzsche, Sartre, Viktor Frankl)** to explore meaning.
- Use **Positive Psychology (Martin Seligman, Mihaly Csikszentmihalyi)** to shift perspectives.

**🧘 MINDFULNESS & MEDITATION TIPS**
- Share a mindfulness or meditation technique related to '{concern}'.

**🔄 DAILY HABIT SUGGESTIONS**
- Recommend 3 small, easy-to-follow habits that build mental resilience related to '{concern}'.

**🔬 SCIENTIFIC EXPLANATION OF EMOTIONS**
- Explain why the user might be feeling this way from a neuroscience perspective related to '{concern}'.

**🧠 COGNITIVE REFRAMING TECHNIQUES**
- Suggest Cognitive Behavioral Therapy (CBT) techniques to shift negative thinking patterns related to '{concern}'.

**🍏 PHYSICAL HEALTH & DIET ADVICE**
- Provide dietary or physical activity suggestions to boost mood and energy related to '{concern}'.

**🎵 MUSIC & ART THERAPY RECOMMENDATIONS**
- Recommend soothing music genres with 3 songs with the artist name, art activities, or creative outlets for stress relief related to '{concern}'.

**📖 COMFORTING STORY OR ANALOGY**
- Create a short, comforting story or analogy of about 200 words that aligns with the user's concern related to '{concern}'.

**📚 PSYCHOLOGICAL TIPS FROM SELF-DEVELOPMENT BOOKS & EXPERTS**
- Quote 1 insight from one of these: **James Clear, Eckhart Tolle, Carol Dweck, Stephen Covey, and David Goggins**.
- Extract 1 insight from one of these: *Atomic Habits*, *Dare to Lead*, *The Power of Now*, and others.
- Provide 1 actionable tip based on their teachings.

**💡 RELEVANT MOTIVATIONAL & SPIRITUAL QUOTES**
- Generate 2 motivational and 2 spiritual quotes related to '{concern}'.
- These should be in the style of great thinkers like Steve Jobs, Winston Churchill, and Marcus Aurelius.

**📚 RECOMMENDED READINGS FOR DEEPER INSIGHTS**
- List at least 2 **books** and 2 **articles** that can help the user gain a deeper understanding of mental well-being.

{tone_instruction}
"#;

/// Builds the completion prompt for an age group and concern.
///
/// Pure and infallible. Both inputs are interpolated literally, so an age
/// group outside the selector set is not rejected here; validation belongs to
/// `AdviceRequest::parse`.
pub fn build_prompt(age_group: &str, concern: &str) -> String {
    let concern_upper = concern.to_uppercase();
    fill_template(
        ADVICE_PROMPT_TEMPLATE,
        &[
            ("age_group", age_group),
            ("concern", concern),
            ("concern_upper", &concern_upper),
            ("tone_instruction", TONE_INSTRUCTION),
        ],
    )
}

impl AdviceRequest {
    pub fn prompt(&self) -> String {
        build_prompt(self.age_group.label(), self.concern.as_str())
    }
}
