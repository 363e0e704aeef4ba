use super::Image;
use crate::error::Result;

/// The analyst's biography, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Biography {
    /// Emphasised opening summary.
    pub introduction: &'static str,
    pub education: &'static str,
    pub career: &'static str,
    pub published_in: &'static str,
    /// Newsletter sentence split around the italicised newsletter name.
    pub newsletter: (&'static str, &'static str, &'static str),
    pub collaboration: &'static str,
    pub wide_image: Image,
    pub portrait: Image,
}

impl Biography {
    /// The name of the newsletter the analyst manages.
    pub fn newsletter_name(&self) -> &'static str {
        self.newsletter.1
    }
}

pub fn biography() -> Result<Biography> {
    Ok(Biography {
        introduction: "Owen Au is an independent analyst specialising in China's maritime \
            strategy and foreign relations, as well as political transformation and \
            securitisation in Hong Kong.",
        education: "After his undergraduate studies at the Chinese University of Hong Kong, \
            he conducted policy research in Hong Kong following the enactment of the National \
            Security Law and subsequent political restructuring. He later pursued a Master's \
            degree in International Studies and Diplomacy at SOAS, University of London, where \
            he began studying China's maritime ambitions and foreign relations.",
        career: "Since completing his Master's degree, he has continued to work as an \
            independent analyst based in London, collaborating with think tanks and \
            organisations across the United Kingdom and the United States. He is interested in \
            expanding his work to European security and foreign policy debates on China.",
        published_in: "His work is widely published in policy journals and think tanks in \
            Europe and the United States, including The Diplomat, The Jamestown Foundation, \
            the Council on Geostrategy, and China Observers in Central and Eastern Europe \
            (CHOICE).",
        newsletter: (
            "He currently manages ",
            "China Maritime Watch",
            ", a Substack newsletter that monitors China's comprehensive sea power agenda \
            through primary-source analysis and is updated biweekly.",
        ),
        collaboration: "Owen is open to project-based collaboration, research partnerships, \
            and commissioned analysis, and welcomes enquiries related to his work.",
        wide_image: Image::hosted(
            "1o9lftPmoLJkFzg1ewbo2oLkvjgs4d5Dx",
            "Owen Au research and analysis",
        )?,
        portrait: Image::hosted("1r68SZvDswRemcIOj72RblB9xi9-c3frx", "Owen Au portrait")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_are_single_spaced() {
        let bio = biography().unwrap();
        for text in [bio.introduction, bio.education, bio.career, bio.published_in] {
            assert!(!text.contains("  "), "double space in {text:?}");
            assert!(!text.contains('\n'));
        }
        assert!(bio.education.contains("SOAS, University of London"));
    }

    #[test]
    fn test_newsletter() {
        let bio = biography().unwrap();
        assert_eq!(bio.newsletter_name(), "China Maritime Watch");
        assert!(bio.newsletter.2.ends_with("updated biweekly."));
    }

    #[test]
    fn test_images() {
        let bio = biography().unwrap();
        assert_eq!(bio.wide_image.alt, "Owen Au research and analysis");
        assert_eq!(
            bio.portrait.src.as_str(),
            "https://drive.google.com/thumbnail?id=1r68SZvDswRemcIOj72RblB9xi9-c3frx&sz=w2000"
        );
    }
}
